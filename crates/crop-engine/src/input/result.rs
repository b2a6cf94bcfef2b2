//! Input result type

use serde::Serialize;
use crate::crop::Handle;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResult {
    /// Input was consumed
    Handled,
    /// Input did not hit the crop rectangle or arrived in the wrong state
    Unhandled,
    /// A drag session started on `handle`
    DragStarted { handle: Handle },
    /// The drag session on `handle` ended and the view is re-centering
    DragEnded { handle: Handle },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Handle involved in a drag start/end, if any
    pub fn handle(&self) -> Option<Handle> {
        match self {
            InputResult::DragStarted { handle } | InputResult::DragEnded { handle } => Some(*handle),
            _ => None,
        }
    }
}
