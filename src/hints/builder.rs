//! Hint collection: one depth-first pass over the syntax tree.
//!
//! The collector asks the comment parser for each commented node's
//! structured entries, keeps the entries whose category is recognized,
//! and grows the hint tree in lockstep with the traversal: a node with
//! qualifying entries opens a nested scope that covers its whole subtree,
//! a node without them inherits the current scope unchanged.

use anyhow::Result;

use super::category::Category;
use super::hint::{HintId, HintTree};
use crate::comments::CommentParser;
use crate::diagnostics::DiagnosticsSink;
use crate::tree::{NodeId, SyntaxTree};

/// Qualifying entries of one node, grouped for insertion.
type Grouped = Vec<(Category, Option<String>, Vec<String>)>;

/// Builds the hint tree for a syntax tree and cross-links the two.
pub struct HintCollector<'a> {
    parser: &'a dyn CommentParser,
    sink: &'a dyn DiagnosticsSink,
}

impl<'a> HintCollector<'a> {
    pub fn new(parser: &'a dyn CommentParser, sink: &'a dyn DiagnosticsSink) -> Self {
        Self { parser, sink }
    }

    /// Run the collection pass.
    ///
    /// Always produces a rooted tree: the root node gets a record even
    /// without comments, so upward searches from any node terminate.
    /// The only failure source is the comment parser; its errors abort
    /// the pass and surface unchanged.
    pub fn collect(&self, tree: &mut SyntaxTree) -> Result<HintTree> {
        let root = tree.root();
        let mut hints = HintTree::new(root);
        let root_hint = hints.root();

        if let Some(grouped) = self.qualifying_entries(tree, root)? {
            fill(&mut hints, root_hint, grouped);
        }
        tree.set_hint(root, root_hint);

        for child in tree.children(root).to_vec() {
            self.visit(tree, &mut hints, child, root_hint)?;
        }
        Ok(hints)
    }

    /// Pre-order visit. `scope` is the innermost hint record in effect;
    /// opening a new one only affects this subtree, the caller's binding
    /// is untouched when the call returns.
    fn visit(
        &self,
        tree: &mut SyntaxTree,
        hints: &mut HintTree,
        node: NodeId,
        scope: HintId,
    ) -> Result<()> {
        let mut scope = scope;
        if let Some(grouped) = self.qualifying_entries(tree, node)? {
            let hint = hints.push_child(scope, node);
            fill(hints, hint, grouped);
            // The comment may lexically sit on a child of the node it
            // annotates; cross-link the semantic target.
            let main_node = tree.commented_root(node);
            hints.set_node(hint, main_node);
            tree.set_hint(main_node, hint);
            scope = hint;
        }
        for child in tree.children(node).to_vec() {
            self.visit(tree, hints, child, scope)?;
        }
        Ok(())
    }

    /// Parse a node's comments and keep the recognized entries.
    ///
    /// Error-flagged entries are forwarded to the diagnostics sink with
    /// file and line context and contribute nothing. Unknown categories
    /// are dropped silently. `None` means the node opens no scope.
    fn qualifying_entries(&self, tree: &SyntaxTree, node: NodeId) -> Result<Option<Grouped>> {
        if tree.comments(node).is_empty() {
            return Ok(None);
        }
        let blocks = self.parser.parse_node(tree, node)?;

        let mut grouped = Grouped::new();
        for block in blocks {
            for entry in block.entries {
                if let Some(err) = &entry.error {
                    let file = tree.file();
                    let line = tree
                        .line(node)
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "?".to_string());
                    self.sink
                        .warn(&format!("{} ({}): {}: {}", file, line, err.message, err.text));
                    continue;
                }
                let Some(category) = Category::parse(&entry.category) else {
                    continue;
                };
                grouped.push((category, entry.functor, entry.arguments));
            }
        }
        Ok(if grouped.is_empty() { None } else { Some(grouped) })
    }
}

fn fill(hints: &mut HintTree, id: HintId, grouped: Grouped) {
    for (category, functor, arguments) in grouped {
        hints
            .get_mut(id)
            .add_entries(category, functor.as_deref(), arguments.iter().map(String::as_str));
    }
}

/// Build the hint tree for `tree` with the given collaborators and
/// cross-link every annotated node. Convenience over [`HintCollector`].
pub fn create_hints_tree(
    tree: &mut SyntaxTree,
    parser: &dyn CommentParser,
    sink: &dyn DiagnosticsSink,
) -> Result<HintTree> {
    HintCollector::new(parser, sink).collect(tree)
}
