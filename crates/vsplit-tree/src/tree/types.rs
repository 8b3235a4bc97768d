//! Core types for the split tree: Axis, Side, NodeId, Node, and the arena.

use std::fmt;

use serde::{Deserialize, Serialize};
use vsplit_common::TreeError;

/// Tag byte (and text token) that marks a leaf.
pub const LEAF_TAG: u8 = b'N';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Cut along a horizontal line; the offset is a y distance.
    Horizontal,
    /// Cut along a vertical line; the offset is an x distance.
    Vertical,
}

impl Axis {
    pub fn tag(self) -> u8 {
        match self {
            Axis::Horizontal => b'H',
            Axis::Vertical => b'V',
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'H' => Some(Axis::Horizontal),
            b'V' => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// The coordinate this axis measures offsets along.
    pub fn select(self, x: f64, y: f64) -> f64 {
        match self {
            Axis::Horizontal => y,
            Axis::Vertical => x,
        }
    }
}

/// Which child slot of a split a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Local coordinate below the offset (left or top).
    Before,
    /// Local coordinate at or past the offset (right or bottom).
    After,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Before => Side::After,
            Side::After => Side::Before,
        }
    }
}

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    Leaf,
    Split {
        axis: Axis,
        offset: f64,
        before: NodeId,
        after: NodeId,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf)
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match (self, side) {
            (Node::Leaf, _) => None,
            (Node::Split { before, .. }, Side::Before) => Some(*before),
            (Node::Split { after, .. }, Side::After) => Some(*after),
        }
    }
}

/// A binary partition of one output, stored as a flat arena.
///
/// Every node has exactly one owner: its parent split, or the tree itself
/// for the root. Freed slots are recycled by later allocations.
#[derive(Debug, Clone)]
pub struct SplitTree {
    pub(crate) nodes: Vec<Option<Node>>,
    pub(crate) free: Vec<NodeId>,
    pub(crate) root: NodeId,
}

impl Default for SplitTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitTree {
    /// A tree with no partitions: one leaf covering the whole output.
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::Leaf)],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    /// Join two subtrees under a new root split.
    pub fn split(axis: Axis, offset: f64, before: SplitTree, after: SplitTree) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(1 + before.node_count() + after.node_count()),
            free: Vec::new(),
            root: NodeId(0),
        };
        tree.nodes.push(Some(Node::Leaf));
        let before = tree.graft(&before, before.root);
        let after = tree.graft(&after, after.root);
        tree.nodes[0] = Some(Node::Split {
            axis,
            offset,
            before,
            after,
        });
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn get(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.node(id).ok_or(TreeError::UnknownNode(id.0))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(TreeError::UnknownNode(id.0))
    }

    /// True when the tree has no partitions at all.
    pub fn is_unsplit(&self) -> bool {
        matches!(self.node(self.root), Some(Node::Leaf))
    }

    /// Number of live nodes (leaves and splits).
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Number of leaves, i.e. fake outputs this tree produces.
    pub fn leaf_count(&self) -> usize {
        self.count_leaves(self.root)
    }

    fn count_leaves(&self, id: NodeId) -> usize {
        match self.node(id) {
            Some(Node::Split { before, after, .. }) => {
                self.count_leaves(*before) + self.count_leaves(*after)
            }
            _ => 1,
        }
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = Some(node);
            id
        } else {
            self.nodes.push(Some(node));
            NodeId(self.nodes.len() - 1)
        }
    }

    /// Release `id` and everything below it.
    pub(crate) fn release(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        self.free.push(id);
        if let Node::Split { before, after, .. } = node {
            self.release(before);
            self.release(after);
        }
    }

    /// Copy the subtree rooted at `id` in `other` into this arena.
    pub(crate) fn graft(&mut self, other: &SplitTree, id: NodeId) -> NodeId {
        match other.node(id) {
            Some(Node::Split {
                axis,
                offset,
                before,
                after,
            }) => {
                let (axis, offset, before, after) = (*axis, *offset, *before, *after);
                let before = self.graft(other, before);
                let after = self.graft(other, after);
                self.alloc(Node::Split {
                    axis,
                    offset,
                    before,
                    after,
                })
            }
            _ => self.alloc(Node::Leaf),
        }
    }

    /// Visit every split in preorder with its axis and offset.
    pub fn for_each_split(&self, f: &mut impl FnMut(NodeId, Axis, f64)) {
        self.visit_splits(self.root, f);
    }

    fn visit_splits(&self, id: NodeId, f: &mut impl FnMut(NodeId, Axis, f64)) {
        if let Some(Node::Split {
            axis,
            offset,
            before,
            after,
        }) = self.node(id)
        {
            f(id, *axis, *offset);
            self.visit_splits(*before, f);
            self.visit_splits(*after, f);
        }
    }

    fn same_shape(&self, a: NodeId, other: &SplitTree, b: NodeId) -> bool {
        match (self.node(a), other.node(b)) {
            (Some(Node::Leaf), Some(Node::Leaf)) => true,
            (
                Some(Node::Split {
                    axis: axis_a,
                    offset: offset_a,
                    before: before_a,
                    after: after_a,
                }),
                Some(Node::Split {
                    axis: axis_b,
                    offset: offset_b,
                    before: before_b,
                    after: after_b,
                }),
            ) => {
                axis_a == axis_b
                    && offset_a == offset_b
                    && self.same_shape(*before_a, other, *before_b)
                    && self.same_shape(*after_a, other, *after_b)
            }
            _ => false,
        }
    }
}

/// Structural equality: same shape, axes, and offsets, regardless of how
/// nodes are laid out in either arena.
impl PartialEq for SplitTree {
    fn eq(&self, other: &Self) -> bool {
        self.same_shape(self.root, other, other.root)
    }
}
