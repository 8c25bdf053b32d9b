//! The hint record and the arena tree holding them.
//!
//! A [`Hint`] stores the qualifying entries of one annotated syntax node
//! as a two-level map: category, then optional functor, then a set of
//! [`HintArgument`] values. The records of one collection pass live in a
//! [`HintTree`] arena whose parent/children links mirror the lexical
//! nesting of the annotated nodes in the primary tree.

use std::collections::{HashMap, HashSet};
use std::ops::Index;

use serde::Serialize;

use super::argument::HintArgument;
use super::category::Category;
use crate::tree::NodeId;

/// Index of a hint record in a [`HintTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HintId(usize);

impl HintId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Entry storage: category -> optional functor -> argument set.
///
/// The `None` functor key holds entries of plain attributes like
/// `@ignore(foo)`; it is distinct from every named functor.
pub type Entries = HashMap<Category, HashMap<Option<String>, HashSet<HintArgument>>>;

/// Hint record of one annotated syntax node.
#[derive(Debug)]
pub struct Hint {
    entries: Entries,
    node: NodeId,
    parent: Option<HintId>,
    children: Vec<HintId>,
}

impl Hint {
    fn new(node: NodeId, parent: Option<HintId>) -> Self {
        Self {
            entries: Entries::default(),
            node,
            parent,
            children: Vec::new(),
        }
    }

    /// The syntax node this record annotates.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn parent(&self) -> Option<HintId> {
        self.parent
    }

    pub fn children(&self) -> &[HintId] {
        &self.children
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    /// Whether this record carries no entries at all (e.g. the synthesized
    /// root record of a tree without root comments).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert arguments under `(category, functor)`, creating the
    /// intermediate maps on demand. Duplicate arguments (by source text)
    /// collapse through set semantics; this never fails.
    pub fn add_entries<I, A>(&mut self, category: Category, functor: Option<&str>, arguments: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<HintArgument>,
    {
        let set = self
            .entries
            .entry(category)
            .or_default()
            .entry(functor.map(str::to_string))
            .or_default();
        for argument in arguments {
            set.insert(argument.into());
        }
    }

    /// The argument set stored under `(category, functor)`, if any.
    pub fn arguments(&self, category: Category, functor: Option<&str>) -> Option<&HashSet<HintArgument>> {
        self.entries
            .get(&category)?
            .get(&functor.map(str::to_string))
    }

    /// Whether `name` is covered by any argument under `(category,
    /// functor)`. Absent category or functor is `false`, not an error.
    pub fn ident_matches(&self, name: &str, category: Category, functor: Option<&str>) -> bool {
        match self.arguments(category, functor) {
            Some(set) => set.iter().any(|arg| arg.matches(name)),
            None => false,
        }
    }
}

/// All hint records of one collection pass.
///
/// Always holds at least the root record. Records are addressed by
/// [`HintId`]; parent links are plain indices, so upward navigation never
/// fights the ownership of the child records.
#[derive(Debug)]
pub struct HintTree {
    hints: Vec<Hint>,
}

impl HintTree {
    /// Create a tree containing the root record for `root_node`.
    pub(crate) fn new(root_node: NodeId) -> Self {
        Self {
            hints: vec![Hint::new(root_node, None)],
        }
    }

    /// Id of the root record.
    pub fn root(&self) -> HintId {
        HintId(0)
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, id: HintId) -> &Hint {
        &self.hints[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: HintId) -> &mut Hint {
        &mut self.hints[id.0]
    }

    /// Append a new empty record for `node` under `parent`.
    pub(crate) fn push_child(&mut self, parent: HintId, node: NodeId) -> HintId {
        let id = HintId(self.hints.len());
        self.hints.push(Hint::new(node, Some(parent)));
        self.hints[parent.0].children.push(id);
        id
    }

    /// Re-target a record to another syntax node (commented-root
    /// resolution can move the annotation from the node the comment was
    /// lexically found on).
    pub(crate) fn set_node(&mut self, id: HintId, node: NodeId) {
        self.hints[id.0].node = node;
    }

    /// Lazy walk from `from` to the root record, inclusive, innermost
    /// first. Callers scan it for "first matching scope wins" lookups.
    pub fn search_upward(&self, from: HintId) -> SearchUpward<'_> {
        self.upward_from(Some(from))
    }

    /// Like [`Self::search_upward`], but `None` yields an empty walk
    /// ("no enclosing record").
    pub fn upward_from(&self, from: Option<HintId>) -> SearchUpward<'_> {
        SearchUpward { tree: self, next: from }
    }

    /// Pre-order walk over `from` and all its descendants.
    pub fn iter_subtree(&self, from: HintId) -> Subtree<'_> {
        Subtree {
            tree: self,
            stack: vec![from],
        }
    }

    /// Pre-order walk over every record in the tree.
    pub fn iter(&self) -> Subtree<'_> {
        self.iter_subtree(self.root())
    }
}

impl Index<HintId> for HintTree {
    type Output = Hint;

    fn index(&self, id: HintId) -> &Hint {
        self.get(id)
    }
}

/// See [`HintTree::search_upward`].
pub struct SearchUpward<'a> {
    tree: &'a HintTree,
    next: Option<HintId>,
}

impl Iterator for SearchUpward<'_> {
    type Item = HintId;

    fn next(&mut self) -> Option<HintId> {
        let id = self.next?;
        self.next = self.tree.get(id).parent();
        Some(id)
    }
}

/// See [`HintTree::iter_subtree`].
pub struct Subtree<'a> {
    tree: &'a HintTree,
    stack: Vec<HintId>,
}

impl Iterator for Subtree<'_> {
    type Item = HintId;

    fn next(&mut self) -> Option<HintId> {
        let id = self.stack.pop()?;
        let children = self.tree.get(id).children();
        self.stack.extend(children.iter().rev());
        Some(id)
    }
}
