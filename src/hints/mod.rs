//! Hint collection and scope resolution.
//!
//! ## Module Structure
//!
//! - `category`: the closed set of recognized hint categories
//! - `argument`: argument tokens with glob-lenient matching
//! - `hint`: the `Hint` record and the `HintTree` arena
//! - `builder`: the depth-first collection pass
//! - `resolve`: nearest-enclosing-hint queries for arbitrary nodes
//!
//! ## Collection Pass
//!
//! 1. The root node always gets a record, filled from its comments when
//!    they carry qualifying entries, empty otherwise.
//! 2. One pre-order walk over the rest of the tree: every node whose
//!    comments qualify opens a child record under the current scope and
//!    becomes the scope for its own subtree; every other node inherits.
//! 3. Annotated nodes and their records are cross-linked both ways, so
//!    `resolve` can answer queries without re-walking the syntax tree.

pub mod argument;
pub mod builder;
pub mod category;
pub mod hint;
pub mod resolve;

pub use argument::HintArgument;
pub use builder::{HintCollector, create_hints_tree};
pub use category::Category;
pub use hint::{Entries, Hint, HintId, HintTree, SearchUpward, Subtree};
pub use resolve::{find_enclosing_hint, hints_upward, ident_matches_upward};
