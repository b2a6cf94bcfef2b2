//! Auto-pan during drags
//!
//! Keeps the crop rectangle's projection inside the viewport while the user
//! drags it past an edge, without scrolling past the image itself.

use crate::math::{Rect, Size, ViewTransform, Vec2};

/// Offset correction that pulls `screen_rect` back into the viewport
///
/// Each axis is corrected once: right/bottom overflow is checked first and
/// left/top only when the far side did not overflow. The correction never
/// moves the matching image edge inside the viewport. Returns [`Vec2::ZERO`]
/// when nothing overflows or the viewport has no size yet.
pub fn auto_pan(
    screen_rect: &Rect,
    transform: &ViewTransform,
    image_size: Size,
    viewport: Size,
) -> Vec2 {
    if viewport.is_empty() {
        return Vec2::ZERO;
    }
    let image = transform.rect_to_screen(&Rect::from_size(image_size));
    Vec2::new(
        axis_pan(screen_rect.left, screen_rect.right, image.left, image.right, viewport.width),
        axis_pan(screen_rect.top, screen_rect.bottom, image.top, image.bottom, viewport.height),
    )
}

fn axis_pan(start: f32, end: f32, image_start: f32, image_end: f32, extent: f32) -> f32 {
    if end > extent {
        let room = (image_end - extent).max(0.0);
        -(end - extent).min(room)
    } else if start < 0.0 {
        let room = (-image_start).max(0.0);
        (-start).min(room)
    } else {
        0.0
    }
}
