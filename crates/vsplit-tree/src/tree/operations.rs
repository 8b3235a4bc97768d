//! Mutating operations on the split tree: create, move, collapse, prune.
//!
//! Nodes are addressed by [`NodeId`]. Structurally identical subtrees are
//! distinct nodes, so nothing here matches by value.

use vsplit_common::TreeError;

use super::{Axis, Node, NodeId, Side, SplitTree};

fn check_offset(offset: f64) -> Result<(), TreeError> {
    if offset.is_finite() && offset > 0.0 {
        Ok(())
    } else {
        Err(TreeError::InvalidOffset(offset))
    }
}

impl SplitTree {
    /// Turn the leaf `id` into a split with two fresh leaves.
    pub fn convert_leaf_to_split(
        &mut self,
        id: NodeId,
        axis: Axis,
        offset: f64,
    ) -> Result<(), TreeError> {
        check_offset(offset)?;
        if !self.get(id)?.is_leaf() {
            return Err(TreeError::NotALeaf(id.0));
        }
        let before = self.alloc(Node::Leaf);
        let after = self.alloc(Node::Leaf);
        *self.get_mut(id)? = Node::Split {
            axis,
            offset,
            before,
            after,
        };
        Ok(())
    }

    /// Move the boundary of split `id`. Topology is unchanged.
    pub fn set_offset(&mut self, id: NodeId, new_offset: f64) -> Result<(), TreeError> {
        check_offset(new_offset)?;
        match self.get_mut(id)? {
            Node::Split { offset, .. } => {
                *offset = new_offset;
                Ok(())
            }
            Node::Leaf => Err(TreeError::NotASplit(id.0)),
        }
    }

    /// Remove the boundary of split `id`, keeping its `keep` child.
    ///
    /// The kept child takes over `id`'s slot, so the parent link (or the
    /// root) stays valid; the other child is discarded with its subtree.
    pub fn collapse(&mut self, id: NodeId, keep: Side) -> Result<(), TreeError> {
        let node = *self.get(id)?;
        let (Some(kept), Some(dropped)) = (node.child(keep), node.child(keep.opposite())) else {
            return Err(TreeError::NotASplit(id.0));
        };
        let replacement = *self.get(kept)?;
        self.release(dropped);
        self.nodes[kept.0] = None;
        self.free.push(kept);
        *self.get_mut(id)? = replacement;
        Ok(())
    }

    /// Discard everything below `id`, leaving it a bare leaf.
    pub fn prune(&mut self, id: NodeId) -> Result<(), TreeError> {
        if let Node::Split { before, after, .. } = *self.get(id)? {
            self.release(before);
            self.release(after);
            *self.get_mut(id)? = Node::Leaf;
        }
        Ok(())
    }
}
