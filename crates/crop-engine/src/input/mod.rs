//! Gesture state machine
//!
//! Tracks whether a pointer is down over the crop rectangle and, separately,
//! the active drag session. The engine feeds it hit-test results; this module
//! never looks at geometry beyond the session it stores.

mod controller;
mod result;
mod session;

pub use controller::{InteractionController, InteractionState};
pub use result::InputResult;
pub use session::InteractionSession;
