//! Binary and text encodings of a [`SplitTree`](crate::SplitTree).

pub mod binary;
pub mod text;

pub use binary::{decode_tree, encode_tree, encode_tree_to_vec};
pub use text::{format_tree, format_tree_indented, format_tree_inline, parse_tree};
