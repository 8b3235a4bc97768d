//! Tree-to-rect computation.
//!
//! Turns the local offsets stored in a [`SplitTree`] into global
//! rectangles, which is what the faking layer exposes as outputs and
//! what a renderer draws.

use vsplit_common::Rect;

use crate::tree::{Axis, Node, NodeId, Side, SplitTree, TreePath};

/// Split `bounds` at a local `offset` along `axis`.
pub fn divide(bounds: Rect, axis: Axis, offset: f64) -> (Rect, Rect) {
    match axis {
        Axis::Horizontal => (
            Rect::new(bounds.x, bounds.y, bounds.width, offset),
            Rect::new(
                bounds.x,
                bounds.y + offset,
                bounds.width,
                bounds.height - offset,
            ),
        ),
        Axis::Vertical => (
            Rect::new(bounds.x, bounds.y, offset, bounds.height),
            Rect::new(
                bounds.x + offset,
                bounds.y,
                bounds.width - offset,
                bounds.height,
            ),
        ),
    }
}

impl SplitTree {
    /// Global rectangle of every leaf, in preorder.
    pub fn leaf_rects(&self, bounds: Rect) -> Vec<(NodeId, Rect)> {
        let mut out = Vec::new();
        self.layout_node(self.root(), bounds, &mut out);
        out
    }

    fn layout_node(&self, id: NodeId, bounds: Rect, out: &mut Vec<(NodeId, Rect)>) {
        match self.node(id) {
            Some(Node::Split {
                axis,
                offset,
                before,
                after,
            }) => {
                let (a, b) = divide(bounds, *axis, *offset);
                self.layout_node(*before, a, out);
                self.layout_node(*after, b, out);
            }
            _ => out.push((id, bounds)),
        }
    }

    /// Global rectangle of the region the head of `path` covers.
    pub fn region_of(&self, path: &TreePath, bounds: Rect) -> Rect {
        let mut region = bounds;
        for pair in path.steps().windows(2).rev() {
            let (child, parent) = (pair[0], pair[1]);
            if let Some(Node::Split { axis, offset, .. }) = self.node(parent.node) {
                let (a, b) = divide(region, *axis, *offset);
                region = match child.side {
                    Some(Side::After) => b,
                    _ => a,
                };
            }
        }
        region
    }

    /// Extent along `axis` the subtree at `id` needs. Its region must be
    /// strictly larger than this for every offset below it to fit.
    pub fn required_extent(&self, id: NodeId, axis: Axis) -> f64 {
        match self.node(id) {
            Some(Node::Split {
                axis: split_axis,
                offset,
                before,
                after,
            }) => {
                if *split_axis == axis {
                    offset + self.required_extent(*after, axis)
                } else {
                    self.required_extent(*before, axis)
                        .max(self.required_extent(*after, axis))
                }
            }
            _ => 0.0,
        }
    }

    /// Check that every offset lies strictly inside the region it divides.
    pub fn fits_within(&self, bounds: Rect) -> bool {
        self.fits_node(self.root(), bounds)
    }

    fn fits_node(&self, id: NodeId, bounds: Rect) -> bool {
        match self.node(id) {
            Some(Node::Split {
                axis,
                offset,
                before,
                after,
            }) => {
                let extent = match axis {
                    Axis::Horizontal => bounds.height,
                    Axis::Vertical => bounds.width,
                };
                if !(*offset > 0.0 && *offset < extent) {
                    return false;
                }
                let (a, b) = divide(bounds, *axis, *offset);
                self.fits_node(*before, a) && self.fits_node(*after, b)
            }
            _ => true,
        }
    }
}
