//! Whitespace-tokenized tree syntax used by the scripted interface.
//!
//! `H <offset> <before> <after>`, `V <offset> <before> <after>`, or `N`.
//! Any amount of whitespace separates tokens; indentation is cosmetic.

use std::fmt::Write;

use vsplit_common::CodecError;

use crate::tree::{Axis, Node, NodeId, SplitTree};

use super::binary::MAX_DEPTH;

/// Parse a tree, consuming every token of `text`.
pub fn parse_tree(text: &str) -> Result<SplitTree, CodecError> {
    let mut tokens = text.split_whitespace();
    let mut tree = SplitTree::new();
    let root = tree.root();
    parse_node(&mut tree, root, &mut tokens, 0)?;
    if let Some(extra) = tokens.next() {
        return Err(CodecError::SyntaxError(extra.to_string()));
    }
    Ok(tree)
}

fn parse_node<'a>(
    tree: &mut SplitTree,
    slot: NodeId,
    tokens: &mut impl Iterator<Item = &'a str>,
    depth: usize,
) -> Result<(), CodecError> {
    if depth > MAX_DEPTH {
        return Err(CodecError::MalformedTree(format!(
            "nesting deeper than {MAX_DEPTH}"
        )));
    }
    let token = tokens
        .next()
        .ok_or_else(|| CodecError::MalformedTree("unexpected end of input".into()))?;
    let axis = match token {
        "N" => return Ok(()),
        "H" => Axis::Horizontal,
        "V" => Axis::Vertical,
        other => return Err(CodecError::SyntaxError(other.to_string())),
    };
    let raw = tokens
        .next()
        .ok_or_else(|| CodecError::MalformedTree(format!("missing offset after '{token}'")))?;
    let offset: u32 = raw
        .parse()
        .map_err(|_| CodecError::SyntaxError(raw.to_string()))?;
    if offset == 0 {
        return Err(CodecError::SyntaxError(raw.to_string()));
    }
    tree.convert_leaf_to_split(slot, axis, f64::from(offset))
        .map_err(|e| CodecError::MalformedTree(e.to_string()))?;
    let Some(Node::Split { before, after, .. }) = tree.node(slot).copied() else {
        return Err(CodecError::MalformedTree(format!("{slot} did not split")));
    };
    parse_node(tree, before, tokens, depth + 1)?;
    parse_node(tree, after, tokens, depth + 1)
}

/// Multi-line form with one space of indentation per level, as written
/// by `dump-config`.
pub fn format_tree(tree: &SplitTree) -> String {
    format_tree_indented(tree, " ")
}

/// Multi-line form indenting each level by `indent`.
pub fn format_tree_indented(tree: &SplitTree, indent: &str) -> String {
    let mut lines = Vec::new();
    format_node(tree, tree.root(), indent, 0, &mut lines);
    lines.join("\n")
}

/// Single-line form: `V 960 N N`.
pub fn format_tree_inline(tree: &SplitTree) -> String {
    let mut lines = Vec::new();
    format_node(tree, tree.root(), "", 0, &mut lines);
    lines.join(" ")
}

fn format_node(tree: &SplitTree, id: NodeId, indent: &str, depth: usize, out: &mut Vec<String>) {
    let mut line = indent.repeat(depth);
    match tree.node(id) {
        Some(Node::Split {
            axis,
            offset,
            before,
            after,
        }) => {
            let _ = write!(line, "{} {}", axis.tag() as char, *offset as u32);
            out.push(line);
            format_node(tree, *before, indent, depth + 1, out);
            format_node(tree, *after, indent, depth + 1, out);
        }
        _ => {
            line.push('N');
            out.push(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> SplitTree {
        SplitTree::new()
    }

    #[test]
    fn parse_leaf() {
        assert!(parse_tree("N").unwrap().is_unsplit());
        assert!(parse_tree("  N \n").unwrap().is_unsplit());
    }

    #[test]
    fn parse_single_horizontal() {
        let tree = parse_tree("H 500 N N").unwrap();
        assert_eq!(
            tree,
            SplitTree::split(Axis::Horizontal, 500.0, leaf(), leaf())
        );
    }

    #[test]
    fn parse_nested_preorder() {
        let tree = parse_tree("V 960 N H 400 N N").unwrap();
        assert_eq!(
            tree,
            SplitTree::split(
                Axis::Vertical,
                960.0,
                leaf(),
                SplitTree::split(Axis::Horizontal, 400.0, leaf(), leaf()),
            )
        );
    }

    #[test]
    fn unknown_leading_token_is_named() {
        assert_eq!(
            parse_tree("X 5 N N").unwrap_err(),
            CodecError::SyntaxError("X".into())
        );
        assert_eq!(
            parse_tree("H 5 N Q").unwrap_err(),
            CodecError::SyntaxError("Q".into())
        );
    }

    #[test]
    fn bad_offset_is_syntax_error() {
        assert_eq!(
            parse_tree("V abc N N").unwrap_err(),
            CodecError::SyntaxError("abc".into())
        );
        assert_eq!(
            parse_tree("V -3 N N").unwrap_err(),
            CodecError::SyntaxError("-3".into())
        );
        assert_eq!(
            parse_tree("V 0 N N").unwrap_err(),
            CodecError::SyntaxError("0".into())
        );
    }

    #[test]
    fn running_out_of_tokens_is_malformed() {
        assert!(matches!(
            parse_tree("H 500 N"),
            Err(CodecError::MalformedTree(_))
        ));
        assert!(matches!(parse_tree("V"), Err(CodecError::MalformedTree(_))));
        assert!(matches!(parse_tree(""), Err(CodecError::MalformedTree(_))));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(
            parse_tree("N N").unwrap_err(),
            CodecError::SyntaxError("N".into())
        );
    }

    #[test]
    fn format_matches_dump_layout() {
        let tree = parse_tree("V 960 N H 400 N N").unwrap();
        assert_eq!(format_tree(&tree), "V 960\n N\n H 400\n  N\n  N");
        assert_eq!(format_tree_inline(&tree), "V 960 N H 400 N N");
        assert_eq!(format_tree(&leaf()), "N");
    }

    #[test]
    fn format_reparses_with_any_indent() {
        let tree = parse_tree("H 500 V 100 N N N").unwrap();
        for text in [
            format_tree(&tree),
            format_tree_indented(&tree, "\t\t"),
            format_tree_inline(&tree),
        ] {
            assert_eq!(parse_tree(&text).unwrap(), tree);
        }
    }
}
