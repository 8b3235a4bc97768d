//! Byte encoding of a tree.
//!
//! ```text
//! <splits> := ("H" | "V") <offset: u32, native order> <splits> <splits>
//!           | "N"
//! ```

use vsplit_common::CodecError;

use crate::tree::{Axis, Node, NodeId, SplitTree, LEAF_TAG};

/// Nesting bound for decoding untrusted input.
pub const MAX_DEPTH: usize = 1024;

/// Append the preorder encoding of `tree` to `out`.
pub fn encode_tree(tree: &SplitTree, out: &mut Vec<u8>) {
    encode_node(tree, tree.root(), out);
}

pub fn encode_tree_to_vec(tree: &SplitTree) -> Vec<u8> {
    let mut out = Vec::with_capacity(tree.node_count() * 5);
    encode_tree(tree, &mut out);
    out
}

fn encode_node(tree: &SplitTree, id: NodeId, out: &mut Vec<u8>) {
    match tree.node(id) {
        Some(Node::Split {
            axis,
            offset,
            before,
            after,
        }) => {
            out.push(axis.tag());
            // Offsets are whole pixels on the wire.
            out.extend_from_slice(&(*offset as u32).to_ne_bytes());
            encode_node(tree, *before, out);
            encode_node(tree, *after, out);
        }
        _ => out.push(LEAF_TAG),
    }
}

/// Decode one tree from the front of `bytes`, returning the remainder.
pub fn decode_tree(bytes: &[u8]) -> Result<(SplitTree, &[u8]), CodecError> {
    let mut tree = SplitTree {
        nodes: Vec::new(),
        free: Vec::new(),
        root: NodeId(0),
    };
    let (root, rest) = decode_node(&mut tree, bytes, 0)?;
    tree.root = root;
    Ok((tree, rest))
}

fn decode_node<'a>(
    tree: &mut SplitTree,
    bytes: &'a [u8],
    depth: usize,
) -> Result<(NodeId, &'a [u8]), CodecError> {
    if depth > MAX_DEPTH {
        return Err(CodecError::MalformedTree(format!(
            "nesting deeper than {MAX_DEPTH}"
        )));
    }
    let (&tag, rest) = bytes
        .split_first()
        .ok_or_else(|| CodecError::MalformedTree("unexpected end of input".into()))?;
    if tag == LEAF_TAG {
        return Ok((tree.alloc(Node::Leaf), rest));
    }
    let axis = Axis::from_tag(tag)
        .ok_or_else(|| CodecError::MalformedTree(format!("unknown tag byte 0x{tag:02x}")))?;
    if rest.len() < 4 {
        return Err(CodecError::MalformedTree(format!(
            "truncated offset after '{}'",
            tag as char
        )));
    }
    let (raw, rest) = rest.split_at(4);
    let offset = u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]);
    let (before, rest) = decode_node(tree, rest, depth + 1)?;
    let (after, rest) = decode_node(tree, rest, depth + 1)?;
    let id = tree.alloc(Node::Split {
        axis,
        offset: f64::from(offset),
        before,
        after,
    });
    Ok((id, rest))
}
