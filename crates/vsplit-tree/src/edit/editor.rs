use tracing::debug;

use crate::tree::SplitTree;

use super::session::EditSession;
use super::types::{Canvas, EditState, PointerButton};

/// Routes pointer events for one canvas into at most one live gesture.
#[derive(Debug, Clone)]
pub struct Editor {
    canvas: Canvas,
    session: Option<EditSession>,
}

impl Editor {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            session: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn state(&self) -> EditState {
        self.session
            .as_ref()
            .map_or(EditState::Idle, EditSession::state)
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Start a gesture. A press during an active gesture replaces it.
    pub fn pointer_down(&mut self, tree: &SplitTree, x: f64, y: f64, button: PointerButton) {
        if self.session.is_some() {
            debug!("press during active gesture; restarting");
        }
        self.session = EditSession::pointer_down(tree, &self.canvas, x, y, button);
    }

    pub fn pointer_move(&mut self, tree: &mut SplitTree, x: f64, y: f64) {
        if let Some(session) = self.session.as_mut() {
            session.pointer_move(tree, &self.canvas, x, y);
        }
    }

    /// End the gesture. Returns `true` when the tree lost a boundary.
    pub fn pointer_up(&mut self, tree: &mut SplitTree, x: f64, y: f64) -> bool {
        match self.session.take() {
            Some(session) => session.pointer_up(tree, x, y),
            None => false,
        }
    }

    /// Drop the active gesture, keeping whatever it already changed.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
