//! Recorded pointer gestures for `replay`.
//!
//! One event per line, canvas coordinates:
//!
//! ```text
//! # split HDMI1 down the middle
//! down 150 20
//! move 151 80
//! up 151 80
//! down 152 40 secondary
//! up 152 40
//! ```

use vsplit_common::VsplitError;
use vsplit_tree::{Editor, PointerButton, SplitTree};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Down { x: f64, y: f64, button: PointerButton },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

pub fn parse_script(text: &str) -> Result<Vec<GestureEvent>, VsplitError> {
    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let fail = |msg: String| VsplitError::Other(format!("script line {}: {msg}", index + 1));

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let coord = |i: usize| -> Result<f64, VsplitError> {
            let raw = tokens
                .get(i)
                .ok_or_else(|| fail("missing coordinate".into()))?;
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| fail(format!("bad coordinate '{raw}'")))
        };
        let (x, y) = (coord(1)?, coord(2)?);

        let (event, arity) = match tokens[0] {
            "down" => {
                let button = match tokens.get(3).copied() {
                    None | Some("primary") => PointerButton::Primary,
                    Some("secondary") => PointerButton::Secondary,
                    Some("middle") => PointerButton::Middle,
                    Some(other) => return Err(fail(format!("unknown button '{other}'"))),
                };
                (GestureEvent::Down { x, y, button }, 4)
            }
            "move" => (GestureEvent::Move { x, y }, 3),
            "up" => (GestureEvent::Up { x, y }, 3),
            other => return Err(fail(format!("unknown event '{other}'"))),
        };
        if tokens.len() > arity {
            return Err(fail(format!("unexpected '{}'", tokens[arity])));
        }
        events.push(event);
    }
    Ok(events)
}

/// Feed `events` to `editor`. Returns how many boundaries were removed.
pub fn replay(editor: &mut Editor, tree: &mut SplitTree, events: &[GestureEvent]) -> usize {
    let mut removed = 0;
    for event in events {
        match *event {
            GestureEvent::Down { x, y, button } => editor.pointer_down(tree, x, y, button),
            GestureEvent::Move { x, y } => editor.pointer_move(tree, x, y),
            GestureEvent::Up { x, y } => {
                if editor.pointer_up(tree, x, y) {
                    removed += 1;
                }
            }
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsplit_tree::codec::format_tree_inline;
    use vsplit_tree::Canvas;

    #[test]
    fn parses_events_and_comments() {
        let events = parse_script("# header\n\ndown 1 2\nmove 3.5 4 # drag\nup 5 6\ndown 7 8 middle\n").unwrap();
        assert_eq!(
            events,
            vec![
                GestureEvent::Down {
                    x: 1.0,
                    y: 2.0,
                    button: PointerButton::Primary
                },
                GestureEvent::Move { x: 3.5, y: 4.0 },
                GestureEvent::Up { x: 5.0, y: 6.0 },
                GestureEvent::Down {
                    x: 7.0,
                    y: 8.0,
                    button: PointerButton::Middle
                },
            ]
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        for text in ["jump 1 2", "down 1", "move x 2", "up 1 2 3", "down 1 2 left", "move inf 2"] {
            let err = parse_script(text).unwrap_err();
            assert!(err.to_string().starts_with("script line 1:"), "{text}: {err}");
        }
    }

    #[test]
    fn replay_splits_and_removes() {
        let mut tree = SplitTree::new();
        let mut editor = Editor::new(Canvas::for_output(1920.0, 1080.0, 300.0));
        let events = parse_script(
            "down 110 10\nmove 110 120\nup 110 120\n\
             down 112 80 secondary\nup 112 80\n",
        )
        .unwrap();

        let removed = replay(&mut editor, &mut tree, &events[..3]);
        assert_eq!(removed, 0);
        assert_eq!(format_tree_inline(&tree), "V 704 N N");

        let removed = replay(&mut editor, &mut tree, &events[3..]);
        assert_eq!(removed, 1);
        assert!(tree.is_unsplit());
    }
}
