//! Pointer handling, drag sessions and auto-pan

use log::{debug, trace};
use crate::autopan::auto_pan;
use crate::crop::{hit_test, Handle};
use crate::input::{InputResult, InteractionSession};
use crate::math::Vec2;
use super::CropEngine;

impl CropEngine {
    /// Handle under a viewport-space point
    ///
    /// Always `None` before the viewport has a size.
    pub fn handle_at(&self, pos: Vec2) -> Option<Handle> {
        if self.viewport.is_empty() {
            return None;
        }
        hit_test(pos, &self.screen_crop_rect(), self.config.hit_radius_px())
    }

    /// CSS cursor name for a viewport-space point
    pub fn cursor_at(&self, pos: Vec2) -> &'static str {
        match self.input.active_handle().or_else(|| self.handle_at(pos)) {
            Some(handle) => handle.cursor(),
            None => "default",
        }
    }

    // =========================================================================
    // Touch channel
    // =========================================================================

    /// Pointer went down; sets the interacting flag when it lands on the rectangle
    pub fn pointer_down(&mut self, pos: Vec2) -> InputResult {
        let hit = self.handle_at(pos).is_some();
        self.input.press(hit);
        if hit {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Pointer went up or was cancelled; clears the interacting flag
    pub fn pointer_up(&mut self) -> InputResult {
        let was_touching = self.input.is_touching();
        self.input.release();
        if was_touching {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    // =========================================================================
    // Drag channel
    // =========================================================================

    /// Start a drag at `pos`; a miss leaves the drag inert
    pub fn drag_start(&mut self, pos: Vec2) -> InputResult {
        let handle = match self.handle_at(pos) {
            Some(handle) => handle,
            None => {
                trace!("drag start at {:?} missed the crop rect", pos);
                return InputResult::Unhandled;
            }
        };

        let cancelled = self.animator.cancel_all();
        if cancelled > 0 {
            debug!("drag start cancelled {} running tweens", cancelled);
        }

        let rect = self.model.current_rect();
        self.input.begin(InteractionSession::new(handle, pos, rect));
        debug!("drag start on {:?} at {:?}, rect {:?}", handle, pos, rect);
        InputResult::DragStarted { handle }
    }

    /// Apply pointer travel to the crop rectangle, then auto-pan
    pub fn drag_move(&mut self, pos: Vec2) -> InputResult {
        let (handle, delta, base) = match self.input.session() {
            Some(session) => (
                session.handle,
                self.transform.delta_to_image(session.screen_delta(pos)),
                session.rect_at_start,
            ),
            None => {
                trace!("ignoring drag move without a session");
                return InputResult::Unhandled;
            }
        };

        self.model.apply_drag(handle, delta, &base);
        self.apply_auto_pan();
        InputResult::Handled
    }

    /// Finish the drag and re-center the crop rectangle
    pub fn drag_end(&mut self, now_ms: f64) -> InputResult {
        self.finish_drag(now_ms, "ended")
    }

    /// Abandon the drag; the rectangle keeps its current value and re-centers
    pub fn drag_cancel(&mut self, now_ms: f64) -> InputResult {
        self.finish_drag(now_ms, "cancelled")
    }

    fn finish_drag(&mut self, now_ms: f64, how: &str) -> InputResult {
        let session = match self.input.end() {
            Some(session) => session,
            None => return InputResult::Unhandled,
        };
        debug!("drag on {:?} {}, rect {:?}", session.handle, how, self.model.current_rect());
        self.center_crop_on_viewport(now_ms);
        InputResult::DragEnded {
            handle: session.handle,
        }
    }

    /// Shift the view so the rectangle's projection stays on screen
    fn apply_auto_pan(&mut self) {
        let pan = auto_pan(
            &self.screen_crop_rect(),
            &self.transform,
            self.image_size(),
            self.viewport,
        );
        if pan.is_zero() {
            return;
        }
        self.transform.offset += pan;
        if let Some(session) = self.input.session_mut() {
            session.shift(pan);
        }
        trace!("auto-pan {:?}, offset now {:?}", pan, self.transform.offset);
    }

    // =========================================================================
    // Raw pointer stream
    // =========================================================================

    /// Raw pointer down; feeds the touch channel and arms drag recognition
    pub fn handle_pointer_down(&mut self, pos: Vec2) -> InputResult {
        self.input.arm(pos);
        self.pointer_down(pos)
    }

    /// Raw pointer move; starts a drag at the down position once the pointer
    /// has travelled past the touch slop
    pub fn handle_pointer_move(&mut self, pos: Vec2) -> InputResult {
        if self.input.is_dragging() {
            return self.drag_move(pos);
        }

        let down = match self.input.take_armed(pos, self.config.touch_slop_px()) {
            Some(down) => down,
            None => return InputResult::Unhandled,
        };
        let started = self.drag_start(down);
        if started.is_handled() {
            self.drag_move(pos);
        }
        started
    }

    /// Raw pointer up; ends any drag and clears the interacting flag
    pub fn handle_pointer_up(&mut self, now_ms: f64) -> InputResult {
        self.input.disarm();
        let ended = self.drag_end(now_ms);
        let released = self.pointer_up();
        if ended.is_handled() {
            ended
        } else {
            released
        }
    }

    /// Raw pointer cancel; like pointer up but reported as a cancelled drag
    pub fn handle_pointer_cancel(&mut self, now_ms: f64) -> InputResult {
        self.input.disarm();
        let ended = self.drag_cancel(now_ms);
        let released = self.pointer_up();
        if ended.is_handled() {
            ended
        } else {
            released
        }
    }
}
