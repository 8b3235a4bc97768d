//! Gesture vocabulary: canvas geometry, buttons, states, thresholds.

use serde::{Deserialize, Serialize};
use vsplit_common::Rect;

/// How close (output pixels) a press must be to a leaf's left or top
/// edge to grab the boundary there.
pub const EDGE_GRAB_DISTANCE: f64 = 50.0;

/// Offset (output pixels) of the second hit-test used to catch presses
/// just before a boundary, on the far side of the enclosing leaf.
pub const FAR_EDGE_OFFSET: f64 = 20.0;

/// Drag distance (canvas pixels) before a new boundary picks an axis.
pub const AXIS_COMMIT_DISTANCE: f64 = 50.0;

/// Pointer positions this close (canvas pixels) to the canvas midpoint
/// snap onto it.
pub const SNAP_DISTANCE: f64 = 10.0;

/// Maximum travel (canvas pixels) for a release to count as a click.
pub const CLICK_TOLERANCE: f64 = 10.0;

/// Default width of the preview canvas.
pub const DEFAULT_CANVAS_WIDTH: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditState {
    Idle,
    /// Pressed inside a leaf; no axis chosen yet.
    Deciding,
    CreatingHorizontal,
    CreatingVertical,
    MovingLeftEdge,
    MovingTopEdge,
    /// Non-primary press on a boundary; a click removes it.
    PendingRemoval,
}

/// The drawing surface pointer events arrive in, scaled onto an output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub output_width: f64,
    pub output_height: f64,
}

impl Canvas {
    /// Canvas with the same size as the output (no scaling).
    pub fn identity(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            output_width: width,
            output_height: height,
        }
    }

    /// Canvas `canvas_width` pixels wide keeping the output's aspect ratio.
    pub fn for_output(output_width: f64, output_height: f64, canvas_width: f64) -> Self {
        let height = if output_width > 0.0 {
            canvas_width * output_height / output_width
        } else {
            0.0
        };
        Self {
            width: canvas_width,
            height,
            output_width,
            output_height,
        }
    }

    pub fn output_bounds(&self) -> Rect {
        Rect::sized(self.output_width, self.output_height)
    }

    /// Canvas position to output-local position.
    pub fn to_local(&self, x: f64, y: f64) -> (f64, f64) {
        (
            scale(x, self.width, self.output_width),
            scale(y, self.height, self.output_height),
        )
    }

    /// Output-local position to canvas position.
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (
            scale(x, self.output_width, self.width),
            scale(y, self.output_height, self.height),
        )
    }

    /// Pull coordinates near the canvas midpoint onto it, per axis.
    pub fn snap(&self, x: f64, y: f64) -> (f64, f64) {
        let snap_axis = |v: f64, extent: f64| {
            let mid = extent / 2.0;
            if (v - mid).abs() < SNAP_DISTANCE {
                mid
            } else {
                v
            }
        };
        (snap_axis(x, self.width), snap_axis(y, self.height))
    }
}

fn scale(v: f64, from: f64, to: f64) -> f64 {
    if from > 0.0 {
        v / from * to
    } else {
        0.0
    }
}
