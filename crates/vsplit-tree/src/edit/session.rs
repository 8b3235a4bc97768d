//! One pointer-down to pointer-up gesture.

use tracing::debug;

use crate::tree::{Axis, Node, Side, SplitTree, TreePath};

use super::types::{
    Canvas, EditState, PointerButton, AXIS_COMMIT_DISTANCE, CLICK_TOLERANCE,
    EDGE_GRAB_DISTANCE, FAR_EDGE_OFFSET,
};

/// Live state of a single gesture. Created by [`EditSession::pointer_down`]
/// and consumed by [`EditSession::pointer_up`].
#[derive(Debug, Clone)]
pub struct EditSession {
    state: EditState,
    /// Canvas position of the press.
    down: (f64, f64),
    /// Creating: the pressed leaf and its ancestors.
    /// Moving/removing: the grabbed split and its ancestors.
    target: TreePath,
}

impl EditSession {
    /// Classify a press. Returns `None` when the press starts no gesture
    /// (a non-primary press away from any boundary).
    pub fn pointer_down(
        tree: &SplitTree,
        canvas: &Canvas,
        x: f64,
        y: f64,
        button: PointerButton,
    ) -> Option<Self> {
        let (lx, ly) = canvas.to_local(x, y);
        let (leaf_path, leaf_pos) = tree.local_point(lx, ly);
        let (mut path, mut pos) = (leaf_path.clone(), leaf_pos);

        if path.len() > 1 {
            // A press just left of or above a boundary belongs to the leaf
            // on its far side.
            let (alt_path, alt_pos) = tree.local_point(lx + FAR_EDGE_OFFSET, ly + FAR_EDGE_OFFSET);
            if alt_pos.0 < EDGE_GRAB_DISTANCE || alt_pos.1 < EDGE_GRAB_DISTANCE {
                path = alt_path;
                pos = alt_pos;
            }
        }

        if path.len() > 1 {
            let grabs = [
                (pos.0, Axis::Vertical, EditState::MovingLeftEdge),
                (pos.1, Axis::Horizontal, EditState::MovingTopEdge),
            ];
            for (distance, axis, moving) in grabs {
                if distance >= EDGE_GRAB_DISTANCE {
                    continue;
                }
                if let Some(edge) = grabbed_edge(tree, &path, axis) {
                    let state = if button == PointerButton::Primary {
                        moving
                    } else {
                        EditState::PendingRemoval
                    };
                    debug!(?state, node = %edge.head(), "grabbed boundary");
                    return Some(Self {
                        state,
                        down: (x, y),
                        target: edge,
                    });
                }
            }
        }

        if button != PointerButton::Primary {
            return None;
        }
        debug!(leaf = %leaf_path.head(), "starting new boundary");
        Some(Self {
            state: EditState::Deciding,
            down: (x, y),
            target: leaf_path,
        })
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn down_point(&self) -> (f64, f64) {
        self.down
    }

    pub fn target(&self) -> &TreePath {
        &self.target
    }

    /// Track the pointer: move the grabbed boundary, or rebuild the
    /// boundary being created at the current position.
    pub fn pointer_move(&mut self, tree: &mut SplitTree, canvas: &Canvas, x: f64, y: f64) {
        let (x, y) = canvas.snap(x, y);
        let (lx, ly) = canvas.to_local(x, y);

        match self.state {
            EditState::MovingLeftEdge | EditState::MovingTopEdge => {
                let axis = if self.state == EditState::MovingLeftEdge {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                };
                let Some(offset) = self.local_offset(tree, canvas, axis, lx, ly) else {
                    return;
                };
                if let Err(e) = tree.set_offset(self.target.head(), offset) {
                    debug!("ignoring move: {e}");
                }
            }
            EditState::Deciding | EditState::CreatingHorizontal | EditState::CreatingVertical => {
                let leaf = self.target.head();
                if let Err(e) = tree.prune(leaf) {
                    debug!("ignoring move: {e}");
                    return;
                }

                let dx = (x - self.down.0).abs();
                let dy = (y - self.down.1).abs();
                let axis = match self.state {
                    EditState::CreatingVertical => Axis::Vertical,
                    EditState::CreatingHorizontal => Axis::Horizontal,
                    _ if dx > dy && dx > AXIS_COMMIT_DISTANCE => Axis::Horizontal,
                    _ if dy > AXIS_COMMIT_DISTANCE => Axis::Vertical,
                    _ => return,
                };
                if self.state == EditState::Deciding {
                    self.state = match axis {
                        Axis::Vertical => EditState::CreatingVertical,
                        Axis::Horizontal => EditState::CreatingHorizontal,
                    };
                    debug!(state = ?self.state, "axis committed");
                }

                let Some(offset) = self.local_offset(tree, canvas, axis, lx, ly) else {
                    return;
                };
                if let Err(e) = tree.convert_leaf_to_split(leaf, axis, offset) {
                    debug!("ignoring move: {e}");
                }
            }
            EditState::PendingRemoval | EditState::Idle => {}
        }
    }

    /// Finish the gesture. Returns `true` when a boundary was removed.
    pub fn pointer_up(self, tree: &mut SplitTree, x: f64, y: f64) -> bool {
        if self.state != EditState::PendingRemoval {
            debug!(state = ?self.state, "gesture finished");
            return false;
        }
        let dx = (x - self.down.0).abs();
        let dy = (y - self.down.1).abs();
        if dx >= CLICK_TOLERANCE || dy >= CLICK_TOLERANCE {
            debug!("removal cancelled by drag");
            return false;
        }
        match tree.collapse(self.target.head(), Side::Before) {
            Ok(()) => {
                debug!(node = %self.target.head(), "boundary removed");
                true
            }
            Err(e) => {
                debug!("ignoring removal: {e}");
                false
            }
        }
    }

    /// Offset along `axis` of the local point `(lx, ly)` inside the region
    /// the target subdivides. The result leaves each side of a split target
    /// at least one pixel wider than its subtree needs, so nothing below it
    /// is pushed out of its region.
    fn local_offset(
        &self,
        tree: &SplitTree,
        canvas: &Canvas,
        axis: Axis,
        lx: f64,
        ly: f64,
    ) -> Option<f64> {
        let (ox, oy) = tree.accumulated_origin(&self.target);
        let region = tree.region_of(&self.target, canvas.output_bounds());
        let extent = match axis {
            Axis::Horizontal => region.height,
            Axis::Vertical => region.width,
        };
        let (before_need, after_need) = match tree.node(self.target.head()) {
            Some(Node::Split { before, after, .. }) => (
                tree.required_extent(*before, axis),
                tree.required_extent(*after, axis),
            ),
            _ => (0.0, 0.0),
        };
        let (lo, hi) = (before_need + 1.0, extent - after_need - 1.0);
        if lo > hi {
            return None;
        }
        Some(axis.select(lx - ox, ly - oy).clamp(lo, hi))
    }
}

/// The nearest ancestor split on `axis` whose `after` branch holds the
/// path, i.e. the boundary along the left (Vertical) or top (Horizontal)
/// edge of the path's head. Returned as a path headed by that split.
fn grabbed_edge(tree: &SplitTree, path: &TreePath, axis: Axis) -> Option<TreePath> {
    let steps = path.steps();
    (1..steps.len())
        .find(|&i| {
            steps[i - 1].side == Some(Side::After)
                && matches!(
                    tree.node(steps[i].node),
                    Some(Node::Split { axis: a, .. }) if *a == axis
                )
        })
        .and_then(|i| path.suffix(i))
}
