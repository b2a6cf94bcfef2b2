//! Viewport animator
//!
//! Keeps at most one tween per animated quantity. Starting a tween on a
//! quantity that is already moving replaces the old one; the quantity then
//! continues from whatever value the caller last applied. Values are pulled by
//! [`ViewportAnimator::tick`] once per frame.

use log::trace;
use crate::math::{Rect, ViewTransform};
use super::Tween;

/// Identifier of a started tween, unique per animator
pub type TweenId = u64;

/// A value the animator can drive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    Scale,
    OffsetX,
    OffsetY,
    RectLeft,
    RectTop,
    RectRight,
    RectBottom,
}

impl Quantity {
    pub const ALL: [Quantity; 7] = [
        Quantity::Scale,
        Quantity::OffsetX,
        Quantity::OffsetY,
        Quantity::RectLeft,
        Quantity::RectTop,
        Quantity::RectRight,
        Quantity::RectBottom,
    ];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Quantity::Scale => 0,
            Quantity::OffsetX => 1,
            Quantity::OffsetY => 2,
            Quantity::RectLeft => 3,
            Quantity::RectTop => 4,
            Quantity::RectRight => 5,
            Quantity::RectBottom => 6,
        }
    }

    /// Check if this quantity belongs to the view transform
    #[inline]
    pub fn is_view(self) -> bool {
        matches!(self, Quantity::Scale | Quantity::OffsetX | Quantity::OffsetY)
    }
}

/// Tweens started together, awaited jointly
///
/// The group is settled once none of its tweens is still running, whether
/// they completed or were superseded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionGroup {
    ids: Vec<TweenId>,
}

impl TransitionGroup {
    /// Group with no tweens (always settled)
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Merge another group into this one
    pub fn join(mut self, other: TransitionGroup) -> Self {
        self.ids.extend(other.ids);
        self
    }
}

#[derive(Clone, Debug)]
struct ActiveTween {
    id: TweenId,
    tween: Tween,
}

/// Owner of every running tween
///
/// Dropping the animator cancels everything it owns.
#[derive(Debug)]
pub struct ViewportAnimator {
    slots: [Option<ActiveTween>; 7],
    duration_ms: u32,
    next_id: TweenId,
}

impl ViewportAnimator {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            slots: Default::default(),
            duration_ms,
            next_id: 1,
        }
    }

    /// Start a tween on `quantity`, superseding any tween already running on it
    pub fn start(&mut self, quantity: Quantity, from: f32, to: f32, now_ms: f64) -> TweenId {
        let id = self.next_id;
        self.next_id += 1;

        let slot = &mut self.slots[quantity.index()];
        if let Some(previous) = slot.take() {
            trace!(
                "{:?}: tween {} superseded by {} (target {} -> {})",
                quantity,
                previous.id,
                id,
                previous.tween.target(),
                to
            );
        }
        *slot = Some(ActiveTween {
            id,
            tween: Tween::new(from, to, now_ms, self.duration_ms),
        });
        id
    }

    /// Start tweens on scale and both offsets
    pub fn start_transform(
        &mut self,
        from: &ViewTransform,
        to: &ViewTransform,
        now_ms: f64,
    ) -> TransitionGroup {
        TransitionGroup {
            ids: vec![
                self.start(Quantity::Scale, from.scale, to.scale, now_ms),
                self.start(Quantity::OffsetX, from.offset.x, to.offset.x, now_ms),
                self.start(Quantity::OffsetY, from.offset.y, to.offset.y, now_ms),
            ],
        }
    }

    /// Start tweens on the four rectangle edges
    pub fn start_rect(&mut self, from: &Rect, to: &Rect, now_ms: f64) -> TransitionGroup {
        TransitionGroup {
            ids: vec![
                self.start(Quantity::RectLeft, from.left, to.left, now_ms),
                self.start(Quantity::RectTop, from.top, to.top, now_ms),
                self.start(Quantity::RectRight, from.right, to.right, now_ms),
                self.start(Quantity::RectBottom, from.bottom, to.bottom, now_ms),
            ],
        }
    }

    /// Stop the tween on `quantity`; returns whether one was running
    pub fn cancel(&mut self, quantity: Quantity) -> bool {
        self.slots[quantity.index()].take().is_some()
    }

    /// Stop every tween; returns how many were running
    pub fn cancel_all(&mut self) -> usize {
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.take())
            .count()
    }

    #[inline]
    pub fn is_animating(&self, quantity: Quantity) -> bool {
        self.slots[quantity.index()].is_some()
    }

    /// Check if no tween is running
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Check if every tween of `group` has completed or been superseded
    pub fn is_group_settled(&self, group: &TransitionGroup) -> bool {
        !self
            .slots
            .iter()
            .flatten()
            .any(|active| group.ids.contains(&active.id))
    }

    /// Sample every running tween at `now_ms`
    ///
    /// Completed tweens report their target one last time and are removed.
    pub fn tick(&mut self, now_ms: f64) -> Vec<(Quantity, f32)> {
        let mut values = Vec::new();
        for quantity in Quantity::ALL {
            let slot = &mut self.slots[quantity.index()];
            let Some(active) = slot.as_ref() else {
                continue;
            };
            values.push((quantity, active.tween.value(now_ms)));
            if active.tween.is_complete(now_ms) {
                *slot = None;
            }
        }
        values
    }
}

impl Drop for ViewportAnimator {
    fn drop(&mut self) {
        let cancelled = self.cancel_all();
        if cancelled > 0 {
            trace!("animator dropped with {} running tweens", cancelled);
        }
    }
}
