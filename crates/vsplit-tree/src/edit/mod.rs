//! Pointer-driven editing of a [`SplitTree`](crate::SplitTree).
//!
//! A press either grabs an existing boundary (the left or top edge of the
//! pressed region) or starts a new one inside the pressed leaf. Moves then
//! reshape the tree in place; a non-primary click on a boundary removes it.

mod editor;
mod session;
mod types;

pub use editor::Editor;
pub use session::EditSession;
pub use types::*;
