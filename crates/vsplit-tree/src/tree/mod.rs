mod operations;
mod traversal;
mod types;

pub use traversal::{PathStep, TreePath};
pub use types::*;
