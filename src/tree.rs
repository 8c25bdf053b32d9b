//! Arena-backed syntax tree consumed by the hint collector.
//!
//! The parser that produces this tree lives outside the crate; this module
//! only defines the node shape the collector needs: ordered children, a
//! parent back-link, raw comment payloads, and a mutable `hint` slot used
//! to cross-link nodes with their hint records.
//!
//! Nodes are addressed by `NodeId` indices into the tree's arena, so the
//! parent/child links never form owning cycles.

use serde::Serialize;

use crate::hints::HintId;

/// Index of a node in a [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index (stable for the lifetime of the tree).
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    kind: String,
    line: Option<usize>,
    comments: Vec<String>,
    /// Set by the producer when a comment lexically found on this node
    /// semantically attaches to a different node.
    comment_anchor: Option<NodeId>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    hint: Option<HintId>,
}

impl Node {
    fn new(kind: String, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            line: None,
            comments: Vec::new(),
            comment_anchor: None,
            parent,
            children: Vec::new(),
            hint: None,
        }
    }
}

/// A parsed source file as a tree of nodes.
///
/// The root node is created together with the tree and always has id
/// [`SyntaxTree::root`]. Children keep insertion order, which fixes the
/// depth-first traversal order used during hint collection.
#[derive(Debug)]
pub struct SyntaxTree {
    file: String,
    nodes: Vec<Node>,
}

impl SyntaxTree {
    /// Create a tree containing only a root node of the given kind.
    pub fn new(file: impl Into<String>, root_kind: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            nodes: vec![Node::new(root_kind.into(), None)],
        }
    }

    /// Source file this tree was parsed from (used in diagnostics).
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the tree (at least 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append a new child node under `parent`, returning its id.
    pub fn add_child(&mut self, parent: NodeId, kind: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind.into(), Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn kind(&self, id: NodeId) -> &str {
        &self.nodes[id.0].kind
    }

    pub fn line(&self, id: NodeId) -> Option<usize> {
        self.nodes[id.0].line
    }

    pub fn set_line(&mut self, id: NodeId, line: usize) {
        self.nodes[id.0].line = Some(line);
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Raw comment payloads attached to a node. Empty means "no comments".
    pub fn comments(&self, id: NodeId) -> &[String] {
        &self.nodes[id.0].comments
    }

    /// Attach a raw comment payload to a node.
    pub fn push_comment(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].comments.push(text.into());
    }

    /// Record that comments found on `id` semantically belong to `target`.
    ///
    /// The adjacency rule (which node a dangling comment modifies) is
    /// decided by the producer of this tree, not by this crate.
    pub fn set_comment_anchor(&mut self, id: NodeId, target: NodeId) {
        self.nodes[id.0].comment_anchor = Some(target);
    }

    /// Resolve the node a comment on `id` semantically attaches to.
    ///
    /// Follows the producer-recorded anchor when present, otherwise the
    /// node itself.
    pub fn commented_root(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].comment_anchor.unwrap_or(id)
    }

    /// The hint record cross-linked to this node, if any.
    pub fn hint(&self, id: NodeId) -> Option<HintId> {
        self.nodes[id.0].hint
    }

    pub(crate) fn set_hint(&mut self, id: NodeId, hint: HintId) {
        self.nodes[id.0].hint = Some(hint);
    }
}
