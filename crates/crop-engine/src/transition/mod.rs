//! Transition and animation module
//!
//! Provides per-quantity tweens for the view transform and the crop
//! rectangle, driven by an injectable millisecond clock.

mod animator;
mod easing;
mod tween;

pub use animator::{Quantity, TransitionGroup, TweenId, ViewportAnimator};
pub use easing::ease_out_cubic;
pub use tween::Tween;
