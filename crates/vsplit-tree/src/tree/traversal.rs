//! Hit-testing and local-frame accumulation.

use super::{Axis, Node, NodeId, Side, SplitTree};

/// One step of a [`TreePath`]: a node and the branch of the next step
/// (its parent) that it occupies. The root step has no side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub node: NodeId,
    pub side: Option<Side>,
}

/// Ancestor chain ordered from the located node up to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePath {
    steps: Vec<PathStep>,
}

impl TreePath {
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Paths always contain at least the root.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The node the path starts from (the located leaf for fresh paths).
    pub fn head(&self) -> NodeId {
        self.steps[0].node
    }

    pub fn root(&self) -> NodeId {
        self.steps[self.steps.len() - 1].node
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.steps.iter().map(|s| s.node)
    }

    /// The tail of this path starting at step `start`, which then becomes
    /// the head. Used to address an ancestor together with its own chain.
    pub fn suffix(&self, start: usize) -> Option<TreePath> {
        (start < self.steps.len()).then(|| TreePath {
            steps: self.steps[start..].to_vec(),
        })
    }
}

impl SplitTree {
    /// Find the leaf containing the local point `(x, y)`, returning it
    /// followed by every enclosing split up to the root.
    pub fn locate(&self, x: f64, y: f64) -> TreePath {
        TreePath {
            steps: self.locate_from(self.root, None, x, y),
        }
    }

    fn locate_from(&self, id: NodeId, side: Option<Side>, x: f64, y: f64) -> Vec<PathStep> {
        let mut steps = match self.node(id) {
            Some(Node::Split {
                axis,
                offset,
                before,
                after,
            }) => {
                if axis.select(x, y) < *offset {
                    self.locate_from(*before, Some(Side::Before), x, y)
                } else {
                    let (x, y) = match axis {
                        Axis::Horizontal => (x, y - offset),
                        Axis::Vertical => (x - offset, y),
                    };
                    self.locate_from(*after, Some(Side::After), x, y)
                }
            }
            _ => Vec::new(),
        };
        steps.push(PathStep { node: id, side });
        steps
    }

    /// Global offset of the local frame the head of `path` lives in.
    ///
    /// Inverse of the translation `locate` applies: every step that sits
    /// in the `after` branch of its parent contributes the parent's offset.
    pub fn accumulated_origin(&self, path: &TreePath) -> (f64, f64) {
        let mut origin = (0.0, 0.0);
        for pair in path.steps.windows(2) {
            let (child, parent) = (pair[0], pair[1]);
            if child.side != Some(Side::After) {
                continue;
            }
            if let Some(Node::Split { axis, offset, .. }) = self.node(parent.node) {
                match axis {
                    Axis::Horizontal => origin.1 += offset,
                    Axis::Vertical => origin.0 += offset,
                }
            }
        }
        origin
    }

    /// Point relative to the local frame of the leaf that contains it.
    pub fn local_point(&self, x: f64, y: f64) -> (TreePath, (f64, f64)) {
        let path = self.locate(x, y);
        let (ox, oy) = self.accumulated_origin(&path);
        (path, (x - ox, y - oy))
    }
}
