//! Property tests for split trees and their encodings

use proptest::prelude::*;
use vsplit_common::Rect;
use vsplit_tree::codec::{decode_tree, encode_tree_to_vec, format_tree, format_tree_inline, parse_tree};
use vsplit_tree::{Axis, Canvas, Editor, PointerButton, Side, SplitTree};

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Horizontal), Just(Axis::Vertical)]
}

fn arb_tree() -> impl Strategy<Value = SplitTree> {
    Just(SplitTree::new()).prop_recursive(6, 64, 2, |inner| {
        (arb_axis(), 1u32..4000, inner.clone(), inner).prop_map(|(axis, offset, before, after)| {
            SplitTree::split(axis, f64::from(offset), before, after)
        })
    })
}

/// Tree shape with offsets given as fractions of the divided region, so
/// every built tree fits its bounds.
#[derive(Debug, Clone)]
enum Shape {
    Leaf,
    Split(Axis, f64, Box<Shape>, Box<Shape>),
}

impl Shape {
    fn build(&self, bounds: Rect) -> SplitTree {
        match self {
            Shape::Leaf => SplitTree::new(),
            Shape::Split(axis, fraction, before, after) => {
                let extent = match axis {
                    Axis::Horizontal => bounds.height,
                    Axis::Vertical => bounds.width,
                };
                let offset = extent * fraction;
                let (a, b) = vsplit_tree::layout::divide(bounds, *axis, offset);
                SplitTree::split(*axis, offset, before.build(a), after.build(b))
            }
        }
    }
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    Just(Shape::Leaf).prop_recursive(6, 64, 2, |inner| {
        (arb_axis(), 0.2f64..0.8, inner.clone(), inner).prop_map(|(axis, fraction, before, after)| {
            Shape::Split(axis, fraction, Box::new(before), Box::new(after))
        })
    })
}

fn split_count(tree: &SplitTree) -> usize {
    let mut count = 0;
    tree.for_each_split(&mut |_, _, _| count += 1);
    count
}

// ============================================================================
// Encoding
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn binary_decode_inverts_encode(tree in arb_tree()) {
        let bytes = encode_tree_to_vec(&tree);
        let (decoded, rest) = decode_tree(&bytes).unwrap();
        prop_assert!(rest.is_empty());
        prop_assert_eq!(decoded, tree);
    }

    #[test]
    fn binary_size_follows_shape(tree in arb_tree()) {
        let splits = split_count(&tree);
        prop_assert_eq!(tree.leaf_count(), splits + 1);
        prop_assert_eq!(encode_tree_to_vec(&tree).len(), splits * 5 + tree.leaf_count());
    }

    #[test]
    fn text_parse_inverts_format(tree in arb_tree()) {
        prop_assert_eq!(parse_tree(&format_tree(&tree)).unwrap(), tree.clone());
        prop_assert_eq!(parse_tree(&format_tree_inline(&tree)).unwrap(), tree);
    }

    #[test]
    fn truncated_binary_never_decodes(tree in arb_tree(), cut in 1usize..64) {
        let bytes = encode_tree_to_vec(&tree);
        let keep = bytes.len().saturating_sub(cut);
        prop_assert!(decode_tree(&bytes[..keep]).is_err());
    }
}

// ============================================================================
// Hit-testing
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn locate_runs_from_leaf_to_root(tree in arb_tree(), x in 0.0f64..5000.0, y in 0.0f64..5000.0) {
        let path = tree.locate(x, y);
        prop_assert!(tree.get(path.head()).unwrap().is_leaf());
        prop_assert_eq!(path.root(), tree.root());
        prop_assert_eq!(path.steps().last().unwrap().side, None);
        for step in &path.steps()[..path.len() - 1] {
            prop_assert!(step.side.is_some());
        }
    }

    #[test]
    fn origin_plus_local_is_global(tree in arb_tree(), x in 0.0f64..5000.0, y in 0.0f64..5000.0) {
        let (path, (lx, ly)) = tree.local_point(x, y);
        let (ox, oy) = tree.accumulated_origin(&path);
        prop_assert!((ox + lx - x).abs() < 1e-9);
        prop_assert!((oy + ly - y).abs() < 1e-9);
    }

    #[test]
    fn fitted_leaf_rects_tile_the_bounds(shape in arb_shape()) {
        let bounds = Rect::sized(1920.0, 1080.0);
        let tree = shape.build(bounds);
        prop_assert!(tree.fits_within(bounds));
        let rects = tree.leaf_rects(bounds);
        prop_assert_eq!(rects.len(), tree.leaf_count());
        let area: f64 = rects.iter().map(|(_, r)| r.width * r.height).sum();
        prop_assert!((area - bounds.width * bounds.height).abs() < 1e-3);
        for (id, rect) in rects {
            let path = tree.locate(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
            prop_assert_eq!(path.head(), id);
            prop_assert_eq!(tree.region_of(&path, bounds), rect);
        }
    }
}

// ============================================================================
// Structural operations
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn collapse_undoes_convert(
        tree in arb_tree(),
        x in 0.0f64..5000.0,
        y in 0.0f64..5000.0,
        axis in arb_axis(),
        offset in 1u32..4000,
        keep_before in any::<bool>(),
    ) {
        let original = tree.clone();
        let mut tree = tree;
        let leaf = tree.locate(x, y).head();
        tree.convert_leaf_to_split(leaf, axis, f64::from(offset)).unwrap();
        prop_assert_eq!(tree.leaf_count(), original.leaf_count() + 1);

        let keep = if keep_before { Side::Before } else { Side::After };
        tree.collapse(leaf, keep).unwrap();
        prop_assert_eq!(tree, original);
    }

    #[test]
    fn prune_restores_a_leaf(tree in arb_tree(), x in 0.0f64..5000.0, y in 0.0f64..5000.0) {
        let path = tree.locate(x, y);
        let mut tree = tree;
        let Some(parent) = path.suffix(1) else {
            return Ok(());
        };
        let before = tree.node_count();
        tree.prune(parent.head()).unwrap();
        prop_assert!(tree.get(parent.head()).unwrap().is_leaf());
        prop_assert!(tree.node_count() < before);
        prop_assert_eq!(tree.leaf_count(), tree.node_count() - split_count(&tree));
    }
}

// ============================================================================
// Gestures
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Down(f64, f64, bool),
    Move(f64, f64),
    Up(f64, f64),
}

fn arb_gesture() -> impl Strategy<Value = Gesture> {
    let x = -50.0f64..1970.0;
    let y = -50.0f64..1130.0;
    prop_oneof![
        (x.clone(), y.clone(), any::<bool>()).prop_map(|(x, y, secondary)| Gesture::Down(x, y, secondary)),
        (x.clone(), y.clone()).prop_map(|(x, y)| Gesture::Move(x, y)),
        (x.clone(), y.clone()).prop_map(|(x, y)| Gesture::Move(x, y)),
        (x, y).prop_map(|(x, y)| Gesture::Up(x, y)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn gestures_keep_every_offset_inside_its_region(
        shape in arb_shape(),
        gestures in prop::collection::vec(arb_gesture(), 1..40),
    ) {
        let bounds = Rect::sized(1920.0, 1080.0);
        let mut tree = shape.build(bounds);
        let mut editor = Editor::new(Canvas::identity(1920.0, 1080.0));
        for gesture in gestures {
            match gesture {
                Gesture::Down(x, y, secondary) => {
                    let button = if secondary { PointerButton::Secondary } else { PointerButton::Primary };
                    editor.pointer_down(&tree, x, y, button);
                }
                Gesture::Move(x, y) => editor.pointer_move(&mut tree, x, y),
                Gesture::Up(x, y) => {
                    editor.pointer_up(&mut tree, x, y);
                }
            }
            prop_assert!(tree.fits_within(bounds), "{:?} -> {}", gesture, format_tree_inline(&tree));
        }
    }
}
