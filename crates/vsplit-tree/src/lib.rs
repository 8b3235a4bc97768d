//! Recursive partition trees for virtual output splits.
//!
//! A [`SplitTree`] divides one physical output into rectangular regions.
//! Every split offset is stored in the local frame of the region it
//! divides, so absolute positions only exist while walking a
//! [`TreePath`] from the root.

pub mod codec;
pub mod edit;
pub mod layout;
pub mod tree;

pub use edit::{Canvas, EditSession, EditState, Editor, PointerButton};
pub use tree::{Axis, Node, NodeId, PathStep, Side, SplitTree, TreePath};
