//! Hintscope - doc-comment hint collection and scope resolution
//!
//! Hintscope turns the structured annotations found in a syntax tree's
//! doc comments (`@ignore(...)`, `@lint ignoreUndefined(...)`,
//! `@require(...)`, ...) into a secondary tree of hint records that
//! mirrors the lexical nesting of the annotated nodes, cross-links both
//! trees, and answers "does any enclosing scope declare this identifier"
//! queries for downstream lint and build logic.
//!
//! ## Module Structure
//!
//! - `tree`: the arena syntax tree consumed by the collector
//! - `comments`: structured entries, the parser trait, and the default
//!   `@attribute` parser
//! - `hints`: hint records, the collection pass, and upward resolution
//! - `diagnostics`: reporting sinks for collection-time warnings
//! - `dump`: serializable snapshots of a hint tree

pub mod comments;
pub mod diagnostics;
pub mod dump;
pub mod hints;
pub mod tree;
