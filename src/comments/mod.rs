//! Structured comment entries and the parser boundary.
//!
//! Comment *text* parsing is not this crate's concern: the collector only
//! consumes structured entries through the [`CommentParser`] trait. A
//! default implementation for `@attribute` style doc comments lives in
//! [`attr`]; callers with their own comment syntax implement the trait
//! themselves.

pub mod attr;

use anyhow::Result;

use crate::tree::{NodeId, SyntaxTree};

pub use attr::AttrParser;

/// Parse failure detail attached to a single entry.
///
/// Carried inside the entry rather than failing the parse so one bad
/// attribute does not discard the rest of the comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryError {
    pub message: String,
    /// The offending comment text, verbatim.
    pub text: String,
}

/// One structured attribute extracted from a comment.
///
/// `category` is the attribute name as written (`ignore`, `lint`, ...);
/// classification into known categories happens later, in the collector.
/// `functor` is the optional subcategory (`ignoreUndefined` in
/// `@lint ignoreUndefined(foo)`); plain attributes like `@ignore(foo)`
/// have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub category: String,
    pub functor: Option<String>,
    pub arguments: Vec<String>,
    /// Present when the entry only reports a parse problem.
    pub error: Option<EntryError>,
}

impl CommentEntry {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            functor: None,
            arguments: Vec::new(),
            error: None,
        }
    }
}

/// Entries extracted from one contiguous comment payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    pub entries: Vec<CommentEntry>,
}

impl CommentBlock {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Converts a node's raw comment payloads into structured entries.
///
/// Returns one [`CommentBlock`] per comment payload on the node, in
/// payload order. A node without comments yields an empty vec. Errors
/// from this trait abort the whole collection pass; recoverable problems
/// should be reported as [`EntryError`] entries instead.
pub trait CommentParser {
    fn parse_node(&self, tree: &SyntaxTree, node: NodeId) -> Result<Vec<CommentBlock>>;
}
