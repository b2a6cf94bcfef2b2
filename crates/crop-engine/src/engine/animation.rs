//! Viewport and crop rectangle transitions

use log::{debug, info, trace};
use crate::math::ViewTransform;
use crate::transition::{Quantity, TransitionGroup};
use super::CropEngine;

impl CropEngine {
    /// Animate the transform so the whole image fits the viewport, centered
    ///
    /// Returns an empty group while the viewport has no size.
    pub fn fit_image_to_viewport(&mut self, now_ms: f64) -> TransitionGroup {
        let target = match ViewTransform::fit(self.image_size(), self.viewport) {
            Some(target) => target,
            None => {
                trace!("fit skipped, viewport is empty");
                return TransitionGroup::empty();
            }
        };
        debug!("fit image: scale {} offset {:?}", target.scale, target.offset);
        self.animator.start_transform(&self.transform, &target, now_ms)
    }

    /// Animate the transform so the current crop rectangle sits centered in the
    /// viewport with the configured margin
    ///
    /// Returns an empty group while the viewport has no size or the margin
    /// leaves no room.
    pub fn center_crop_on_viewport(&mut self, now_ms: f64) -> TransitionGroup {
        let rect = self.model.current_rect();
        let target = match ViewTransform::center_on(&rect, self.viewport, self.config.center_margin_px()) {
            Some(target) => target,
            None => {
                trace!("center crop skipped for viewport {:?}", self.viewport);
                return TransitionGroup::empty();
            }
        };
        debug!("center crop: scale {} offset {:?}", target.scale, target.offset);
        self.animator.start_transform(&self.transform, &target, now_ms)
    }

    /// Animate the crop rectangle back to its default and the view back to the
    /// fitted image
    ///
    /// Any drag in progress is dropped. The returned group settles once both
    /// the rectangle and the view have arrived.
    pub fn reset(&mut self, now_ms: f64) -> TransitionGroup {
        if self.input.end().is_some() {
            debug!("reset dropped the active drag");
        }
        let target = self.model.reset_rect();
        info!("reset to {:?}", target);

        let rect = self
            .animator
            .start_rect(&self.model.current_rect(), &target, now_ms);
        rect.join(self.fit_image_to_viewport(now_ms))
    }

    /// Advance every running tween to `now_ms`
    ///
    /// Returns true while any tween is still running.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let values = self.animator.tick(now_ms);
        if values.is_empty() {
            return false;
        }

        let mut rect = self.model.current_rect();
        let mut rect_changed = false;
        for (quantity, value) in values {
            match quantity {
                Quantity::Scale => self.transform.scale = value,
                Quantity::OffsetX => self.transform.offset.x = value,
                Quantity::OffsetY => self.transform.offset.y = value,
                Quantity::RectLeft => rect.left = value,
                Quantity::RectTop => rect.top = value,
                Quantity::RectRight => rect.right = value,
                Quantity::RectBottom => rect.bottom = value,
            }
            rect_changed |= !quantity.is_view();
        }
        if rect_changed {
            self.model.set_rect(rect);
        }

        !self.animator.is_settled()
    }

    /// Check if any tween is running
    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.animator.is_settled()
    }

    /// Check if every tween of `group` has completed or been superseded
    #[inline]
    pub fn is_group_settled(&self, group: &TransitionGroup) -> bool {
        self.animator.is_group_settled(group)
    }

    /// Stop every running tween where it is
    pub fn cancel_animations(&mut self) {
        let cancelled = self.animator.cancel_all();
        if cancelled > 0 {
            debug!("cancelled {} running tweens", cancelled);
        }
    }
}
