//! Crop rectangle model
//!
//! Owns the crop rectangle in image space. Every mutation goes through
//! [`CropRectModel::apply_drag`] or [`CropRectModel::set_rect`], and both leave
//! the rectangle inside the image and no smaller than the minimum size.

use crate::math::{Rect, Size, Vec2};
use super::Handle;

/// Crop rectangle plus the image it lives in
#[derive(Clone, Debug)]
pub struct CropRectModel {
    image_size: Size,
    /// Requested minimum edge; clamped to the image per axis at use time
    min_crop_size: f32,
    initial_coverage: f32,
    rect: Rect,
}

impl CropRectModel {
    /// Create a model with the default centered rectangle
    ///
    /// `image_size` must be non-empty; the engine validates it before calling.
    pub fn new(image_size: Size, min_crop_size: f32, initial_coverage: f32) -> Self {
        let mut model = Self {
            image_size,
            min_crop_size,
            initial_coverage,
            rect: Rect::from_size(image_size),
        };
        model.rect = model.reset_rect();
        model
    }

    #[inline]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    #[inline]
    pub fn current_rect(&self) -> Rect {
        self.rect
    }

    /// Effective minimum width and height: `min(axis, min_crop_size)`
    #[inline]
    pub fn min_size(&self) -> Size {
        Size::new(self.min_crop_size, self.min_crop_size).min(self.image_size)
    }

    /// Default rectangle: centered, covering `initial_coverage` of each axis,
    /// never below the minimum or above the image
    pub fn reset_rect(&self) -> Rect {
        let min = self.min_size();
        let size = Size::new(
            (self.image_size.width * self.initial_coverage).clamp(min.width, self.image_size.width),
            (self.image_size.height * self.initial_coverage).clamp(min.height, self.image_size.height),
        );
        let origin = (self.image_size.as_vec2() - size.as_vec2()) * 0.5;
        Rect::new(origin.x, origin.y, origin.x + size.width, origin.y + size.height)
    }

    /// Replace the rectangle, sanitising it against the invariants
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = self.sanitize(rect);
    }

    /// Compute the rectangle produced by dragging `handle` by `delta` (image
    /// space) from `base`, and store it
    pub fn apply_drag(&mut self, handle: Handle, delta: Vec2, base: &Rect) -> Rect {
        let next = match handle {
            Handle::Center => self.translated(delta, base),
            _ => self.resized(handle, delta, base),
        };
        self.rect = next;
        next
    }

    /// Move without resizing, keeping the rectangle inside the image
    fn translated(&self, delta: Vec2, base: &Rect) -> Rect {
        let width = base.width();
        let height = base.height();
        let left = (base.left + delta.x).clamp(0.0, (self.image_size.width - width).max(0.0));
        let top = (base.top + delta.y).clamp(0.0, (self.image_size.height - height).max(0.0));
        Rect::new(left, top, left + width, top + height)
    }

    /// Move the handle's edges, then apply the size floor, then the image bounds
    fn resized(&self, handle: Handle, delta: Vec2, base: &Rect) -> Rect {
        let edges = handle.edges();
        let min = self.min_size();
        let mut rect = *base;

        if edges.left {
            rect.left = base.left + delta.x;
            if rect.right - rect.left < min.width {
                rect.left = rect.right - min.width;
            }
        }
        if edges.right {
            rect.right = base.right + delta.x;
            if rect.right - rect.left < min.width {
                rect.right = rect.left + min.width;
            }
        }
        if edges.top {
            rect.top = base.top + delta.y;
            if rect.bottom - rect.top < min.height {
                rect.top = rect.bottom - min.height;
            }
        }
        if edges.bottom {
            rect.bottom = base.bottom + delta.y;
            if rect.bottom - rect.top < min.height {
                rect.bottom = rect.top + min.height;
            }
        }

        self.clamp_to_image(rect)
    }

    #[inline]
    fn clamp_to_image(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.left.max(0.0),
            rect.top.max(0.0),
            rect.right.min(self.image_size.width),
            rect.bottom.min(self.image_size.height),
        )
    }

    /// Force an arbitrary rectangle into a valid one
    ///
    /// Non-finite input falls back to the default rectangle. Undersized axes
    /// grow around their center, then shift back inside the image.
    fn sanitize(&self, rect: Rect) -> Rect {
        if !rect.is_finite() {
            return self.reset_rect();
        }
        let min = self.min_size();
        let (left, right) = sanitize_axis(rect.left, rect.right, min.width, self.image_size.width);
        let (top, bottom) = sanitize_axis(rect.top, rect.bottom, min.height, self.image_size.height);
        Rect::new(left, top, right, bottom)
    }
}

fn sanitize_axis(start: f32, end: f32, min: f32, extent: f32) -> (f32, f32) {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let lo = lo.clamp(0.0, extent);
    let hi = hi.clamp(0.0, extent);
    let length = (hi - lo).clamp(min, extent);
    let center = (lo + hi) * 0.5;
    let start = (center - length * 0.5).clamp(0.0, extent - length);
    (start, start + length)
}
