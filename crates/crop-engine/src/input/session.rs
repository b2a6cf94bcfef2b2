//! Drag session captured at drag start

use crate::crop::Handle;
use crate::math::{Rect, Vec2};

/// State of one drag gesture, alive from drag start to drag end/cancel
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionSession {
    /// Handle grabbed at drag start
    pub handle: Handle,
    /// Pointer position at drag start (viewport space), shifted by auto-pan
    pub drag_start: Vec2,
    /// Crop rectangle at drag start (image space)
    pub rect_at_start: Rect,
}

impl InteractionSession {
    pub fn new(handle: Handle, drag_start: Vec2, rect_at_start: Rect) -> Self {
        Self {
            handle,
            drag_start,
            rect_at_start,
        }
    }

    /// Screen-space travel since drag start
    #[inline]
    pub fn screen_delta(&self, pos: Vec2) -> Vec2 {
        pos - self.drag_start
    }

    /// Follow a viewport pan so the grabbed image point stays under the pointer
    #[inline]
    pub fn shift(&mut self, pan: Vec2) {
        self.drag_start += pan;
    }
}
