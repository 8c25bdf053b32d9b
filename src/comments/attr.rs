//! `@attribute` comment parsing.
//!
//! Recognized forms, anywhere inside a comment payload:
//! - `@category(arg1, arg2)` - plain attribute, e.g. `@ignore(foo, bar)`
//! - `@category functor(arg)` - attribute with subcategory, e.g.
//!   `@lint ignoreUndefined(foo)`
//! - `@category` - bare attribute without arguments
//!
//! Pure text parsing: every `@word` becomes an entry, whether or not the
//! word names a known category (that classification happens in the
//! collector). Surrounding prose and `*` decoration of block comments are
//! skipped.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use super::{CommentBlock, CommentEntry, CommentParser, EntryError};
use crate::tree::{NodeId, SyntaxTree};

static ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s*])@([A-Za-z_]\w*)(?:[ \t]+([A-Za-z_]\w*))?(?:\(([^)\n]*)\))?").unwrap()
});

static UNTERMINATED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s*])@([A-Za-z_]\w*)(?:[ \t]+[A-Za-z_]\w*)?\([^)\n]*$").unwrap()
});

/// Default [`CommentParser`] for `@attribute` style doc comments.
#[derive(Debug, Default)]
pub struct AttrParser;

impl AttrParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one raw comment payload into structured entries.
    pub fn parse_text(&self, text: &str) -> CommentBlock {
        let mut block = CommentBlock::default();
        for line in text.lines() {
            if let Some(caps) = UNTERMINATED_REGEX.captures(line) {
                let mut entry = CommentEntry::new(&caps[1]);
                entry.error = Some(EntryError {
                    message: "unterminated argument list".to_string(),
                    text: line.trim().to_string(),
                });
                block.entries.push(entry);
                continue;
            }
            for caps in ATTR_REGEX.captures_iter(line) {
                let mut entry = CommentEntry::new(&caps[1]);
                match caps.get(3) {
                    Some(args) => {
                        entry.functor = caps.get(2).map(|m| m.as_str().to_string());
                        entry.arguments = parse_arguments(args.as_str());
                    }
                    // A word after the attribute but no argument list is
                    // prose, not a functor ("@deprecated since 2.0").
                    None => entry.functor = None,
                }
                block.entries.push(entry);
            }
        }
        block
    }
}

impl CommentParser for AttrParser {
    fn parse_node(&self, tree: &SyntaxTree, node: NodeId) -> Result<Vec<CommentBlock>> {
        Ok(tree
            .comments(node)
            .iter()
            .map(|text| self.parse_text(text))
            .collect())
    }
}

/// Split a comma-separated argument list, dropping empty segments.
fn parse_arguments(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
