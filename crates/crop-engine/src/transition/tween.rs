//! Single-value tween over a fixed duration

use super::ease_out_cubic;

/// Eased interpolation of one `f32` from `from` to `to`
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Start time (ms timestamp)
    start_ms: f64,
    duration_ms: u32,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Eased value at `now_ms`
    pub fn value(&self, now_ms: f64) -> f32 {
        if self.is_complete(now_ms) {
            return self.to;
        }
        let t = ease_out_cubic(self.progress(now_ms));
        self.from + (self.to - self.from) * t
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }
}
