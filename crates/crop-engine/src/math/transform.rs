//! View transform mapping image space to viewport space

use serde::{Deserialize, Serialize};
use super::{Rect, Size, Vec2};

/// Scale + offset mapping an image-space point `p` to `p * scale + offset`
///
/// Axis-aligned and non-rotating, so rectangles map corner by corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Viewport pixels per image pixel
    pub scale: f32,
    /// Viewport position of the image origin
    pub offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// Unit scale, no offset
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    #[inline]
    pub const fn new(scale: f32, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Convert an image-space point to viewport coordinates
    #[inline]
    pub fn to_screen(&self, image: Vec2) -> Vec2 {
        image * self.scale + self.offset
    }

    /// Convert a viewport point to image coordinates
    #[inline]
    pub fn to_image(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    /// Project an image-space rectangle into the viewport
    #[inline]
    pub fn rect_to_screen(&self, rect: &Rect) -> Rect {
        Rect::new(
            rect.left * self.scale + self.offset.x,
            rect.top * self.scale + self.offset.y,
            rect.right * self.scale + self.offset.x,
            rect.bottom * self.scale + self.offset.y,
        )
    }

    /// Map a viewport rectangle back into image space
    #[inline]
    pub fn rect_to_image(&self, rect: &Rect) -> Rect {
        Rect::new(
            (rect.left - self.offset.x) / self.scale,
            (rect.top - self.offset.y) / self.scale,
            (rect.right - self.offset.x) / self.scale,
            (rect.bottom - self.offset.y) / self.scale,
        )
    }

    /// Convert a viewport-space delta to an image-space delta
    #[inline]
    pub fn delta_to_image(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }

    /// Transform that scales the whole image to fit the viewport, centered
    ///
    /// Returns `None` while either size is empty.
    pub fn fit(image: Size, viewport: Size) -> Option<ViewTransform> {
        if image.is_empty() || viewport.is_empty() {
            return None;
        }
        let scale = (viewport.width / image.width).min(viewport.height / image.height);
        let offset = (viewport.as_vec2() - image.as_vec2() * scale) * 0.5;
        Some(ViewTransform::new(scale, offset))
    }

    /// Transform that centers `rect` in the viewport, keeping `margin` pixels
    /// free on every side
    ///
    /// Returns `None` when the viewport is empty, the margin consumes the whole
    /// viewport, or the rectangle is degenerate.
    pub fn center_on(rect: &Rect, viewport: Size, margin: f32) -> Option<ViewTransform> {
        let available = Size::new(viewport.width - 2.0 * margin, viewport.height - 2.0 * margin);
        if viewport.is_empty() || available.is_empty() || rect.size().is_empty() {
            return None;
        }
        let scale = (available.width / rect.width()).min(available.height / rect.height());
        let offset = viewport.as_vec2() * 0.5 - rect.center() * scale;
        Some(ViewTransform::new(scale, offset))
    }
}
