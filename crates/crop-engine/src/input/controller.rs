//! Interaction controller state machine

use crate::crop::Handle;
use crate::math::Vec2;
use super::InteractionSession;

/// Observable gesture state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    /// Pointer down over the rectangle, no drag recognised yet
    Touching,
    Dragging(Handle),
}

/// Two independent channels: the touch flag (pointer down/up) and the drag
/// session (drag start/move/end). A raw pointer stream is bridged onto the
/// drag channel through the armed down position.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    touching: bool,
    /// Raw pointer-down position waiting to travel past the touch slop
    armed: Option<Vec2>,
    session: Option<InteractionSession>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        match (&self.session, self.touching) {
            (Some(session), _) => InteractionState::Dragging(session.handle),
            (None, true) => InteractionState::Touching,
            (None, false) => InteractionState::Idle,
        }
    }

    /// Pointer went down; `hit` is whether it landed on the rectangle
    pub fn press(&mut self, hit: bool) {
        self.touching = hit;
    }

    /// Pointer went up or was cancelled
    pub fn release(&mut self) {
        self.touching = false;
    }

    #[inline]
    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Check if a drag session is active
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Grid visibility, derived from the touch flag and the active handle
    #[inline]
    pub fn show_grid(&self) -> bool {
        self.touching || self.session.is_some()
    }

    pub fn active_handle(&self) -> Option<Handle> {
        self.session.as_ref().map(|s| s.handle)
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut InteractionSession> {
        self.session.as_mut()
    }

    /// Begin a drag session, replacing any stale one
    pub fn begin(&mut self, session: InteractionSession) {
        self.armed = None;
        self.session = Some(session);
    }

    /// Finish the drag session, returning it if one was active
    pub fn end(&mut self) -> Option<InteractionSession> {
        self.session.take()
    }

    /// Remember a raw pointer-down position
    pub fn arm(&mut self, pos: Vec2) {
        self.armed = Some(pos);
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Take the armed down position once `pos` has travelled at least `slop`
    /// from it
    pub fn take_armed(&mut self, pos: Vec2, slop: f32) -> Option<Vec2> {
        match self.armed {
            Some(down) if down.distance(pos) >= slop => self.armed.take(),
            _ => None,
        }
    }
}
