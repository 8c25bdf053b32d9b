//! Nearest-enclosing-hint lookup for arbitrary syntax nodes.
//!
//! Assumes a hint tree has been collected for the syntax tree already.
//! Nodes without a record of their own inherit the closest ancestor's;
//! on a collected tree that walk always ends at the root record.

use super::category::Category;
use super::hint::{HintId, HintTree, SearchUpward};
use crate::tree::{NodeId, SyntaxTree};

/// The innermost hint record governing `node`: the node's own record if
/// it has one, otherwise the closest annotated ancestor's. `None` only
/// on a tree that never went through collection.
pub fn find_enclosing_hint(tree: &SyntaxTree, node: NodeId) -> Option<HintId> {
    let mut current = Some(node);
    while let Some(id) = current {
        if let Some(hint) = tree.hint(id) {
            return Some(hint);
        }
        current = tree.parent(id);
    }
    None
}

/// Innermost-to-root walk over the hint records governing `node`.
///
/// Empty when no record encloses the node, which callers read as "no
/// annotations apply", not as a failure.
pub fn hints_upward<'a>(
    tree: &SyntaxTree,
    hints: &'a HintTree,
    node: NodeId,
) -> SearchUpward<'a> {
    hints.upward_from(find_enclosing_hint(tree, node))
}

/// Whether any scope enclosing `node` declares `name` under `(category,
/// functor)`. The innermost declaration wins by construction; this only
/// reports existence.
pub fn ident_matches_upward(
    tree: &SyntaxTree,
    hints: &HintTree,
    node: NodeId,
    name: &str,
    category: Category,
    functor: Option<&str>,
) -> bool {
    hints_upward(tree, hints, node).any(|id| hints.get(id).ident_matches(name, category, functor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::AttrParser;
    use crate::diagnostics::NullSink;
    use crate::hints::builder::create_hints_tree;

    fn build(tree: &mut SyntaxTree) -> HintTree {
        create_hints_tree(tree, &AttrParser::new(), &NullSink).unwrap()
    }

    #[test]
    fn test_find_enclosing_uses_own_record_first() {
        let mut tree = SyntaxTree::new("a.js", "file");
        let node = tree.add_child(tree.root(), "function");
        tree.push_comment(node, "@ignore(foo)");

        let hints = build(&mut tree);
        assert_eq!(find_enclosing_hint(&tree, node), tree.hint(node));
        assert_ne!(find_enclosing_hint(&tree, node), Some(hints.root()));
    }

    #[test]
    fn test_find_enclosing_inherits_from_ancestor() {
        let mut tree = SyntaxTree::new("a.js", "file");
        let outer = tree.add_child(tree.root(), "function");
        let block = tree.add_child(outer, "block");
        let leaf = tree.add_child(block, "identifier");
        tree.push_comment(outer, "@lint ignoreUndefined(foo)");

        build(&mut tree);
        assert_eq!(find_enclosing_hint(&tree, leaf), tree.hint(outer));
    }

    #[test]
    fn test_every_node_reaches_root_record() {
        let mut tree = SyntaxTree::new("a.js", "file");
        let a = tree.add_child(tree.root(), "function");
        let b = tree.add_child(a, "block");
        let c = tree.add_child(b, "stmt");
        tree.push_comment(a, "@ignore(x)");

        let hints = build(&mut tree);
        for node in [tree.root(), a, b, c] {
            let last = hints_upward(&tree, &hints, node).last();
            assert_eq!(last, Some(hints.root()));
        }
    }

    #[test]
    fn test_hints_upward_without_collection_is_empty() {
        let mut plain = SyntaxTree::new("a.js", "file");
        let node = plain.add_child(plain.root(), "stmt");

        // hint tree from an unrelated pass; `plain` itself was never
        // collected, so its nodes carry no cross-links
        let mut other = SyntaxTree::new("b.js", "file");
        let hints = build(&mut other);

        assert_eq!(hints_upward(&plain, &hints, node).count(), 0);
    }

    #[test]
    fn test_ident_matches_upward_inherited() {
        let mut tree = SyntaxTree::new("a.js", "file");
        let outer = tree.add_child(tree.root(), "function");
        let inner = tree.add_child(outer, "function");
        let leaf = tree.add_child(inner, "identifier");
        tree.push_comment(outer, "@lint ignoreUndefined(foo)");

        let hints = build(&mut tree);
        assert!(ident_matches_upward(
            &tree,
            &hints,
            leaf,
            "foo",
            Category::Lint,
            Some("ignoreUndefined"),
        ));
        assert!(!ident_matches_upward(
            &tree,
            &hints,
            leaf,
            "bar",
            Category::Lint,
            Some("ignoreUndefined"),
        ));
    }

    #[test]
    fn test_inner_scope_seen_before_outer() {
        let mut tree = SyntaxTree::new("a.js", "file");
        let outer = tree.add_child(tree.root(), "function");
        let inner = tree.add_child(outer, "function");
        tree.push_comment(outer, "@ignore(a)");
        tree.push_comment(inner, "@ignore(b)");

        let hints = build(&mut tree);
        let chain: Vec<_> = hints_upward(&tree, &hints, inner).collect();
        assert_eq!(
            chain,
            vec![
                tree.hint(inner).unwrap(),
                tree.hint(outer).unwrap(),
                hints.root(),
            ]
        );
    }
}
