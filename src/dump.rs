//! Serializable snapshot of a hint tree.
//!
//! Deterministic by construction (sorted maps, sorted argument lists),
//! so two collection passes over the same input serialize identically.
//! Meant for debugging and golden tests, not for persistence: the ids in
//! a dump are only meaningful next to the tree they came from.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use crate::hints::{Hint, HintId, HintTree};

/// One hint record with its subtree, ready for serialization.
///
/// Functor keys are the functor name, or `""` for entries without one.
#[derive(Debug, Serialize)]
pub struct HintDump {
    pub node: usize,
    pub entries: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    pub children: Vec<HintDump>,
}

impl HintDump {
    /// Snapshot the whole tree starting at its root record.
    pub fn from_tree(hints: &HintTree) -> Self {
        Self::from_hint(hints, hints.root())
    }

    fn from_hint(hints: &HintTree, id: HintId) -> Self {
        let hint = hints.get(id);
        Self {
            node: hint.node().index(),
            entries: dump_entries(hint),
            children: hint
                .children()
                .iter()
                .map(|&child| Self::from_hint(hints, child))
                .collect(),
        }
    }
}

fn dump_entries(hint: &Hint) -> BTreeMap<String, BTreeMap<String, Vec<String>>> {
    let mut out = BTreeMap::new();
    for (category, functors) in hint.entries() {
        let mut by_functor = BTreeMap::new();
        for (functor, arguments) in functors {
            let mut sorted: Vec<String> =
                arguments.iter().map(|arg| arg.source().to_string()).collect();
            sorted.sort();
            by_functor.insert(functor.clone().unwrap_or_default(), sorted);
        }
        out.insert(category.to_string(), by_functor);
    }
    out
}

/// Render a hint tree as pretty-printed JSON.
pub fn to_json(hints: &HintTree) -> Result<String> {
    Ok(serde_json::to_string_pretty(&HintDump::from_tree(hints))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::AttrParser;
    use crate::diagnostics::NullSink;
    use crate::hints::create_hints_tree;
    use crate::tree::SyntaxTree;

    fn sample_tree() -> (SyntaxTree, HintTree) {
        let mut tree = SyntaxTree::new("a.js", "file");
        let f = tree.add_child(tree.root(), "function");
        tree.push_comment(f, "@lint ignoreUndefined(zeta, alpha)\n@ignore(qx.*)");
        let hints = create_hints_tree(&mut tree, &AttrParser::new(), &NullSink).unwrap();
        (tree, hints)
    }

    #[test]
    fn test_dump_shape() {
        let (tree, hints) = sample_tree();
        let dump = HintDump::from_tree(&hints);

        assert_eq!(dump.node, tree.root().index());
        assert!(dump.entries.is_empty());
        assert_eq!(dump.children.len(), 1);

        let child = &dump.children[0];
        assert_eq!(child.entries["lint"]["ignoreUndefined"], vec!["alpha", "zeta"]);
        assert_eq!(child.entries["ignore"][""], vec!["qx.*"]);
    }

    #[test]
    fn test_dump_deterministic_across_passes() {
        let (_, first) = sample_tree();
        let (_, second) = sample_tree();
        assert_eq!(to_json(&first).unwrap(), to_json(&second).unwrap());
    }
}
