//! Screen-space geometry for the renderer

use serde::Serialize;
use crate::crop::Handle;
use crate::math::{Rect, Vec2, ViewTransform};
use super::CropEngine;

/// Everything a renderer needs to draw one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderState {
    pub transform: ViewTransform,
    /// Whole image in viewport space
    pub image_rect: Rect,
    /// Crop rectangle in viewport space
    pub crop_rect: Rect,
    /// Handle glyph positions in viewport space
    pub handles: Vec<(Handle, Vec2)>,
    /// Handle being dragged, drawn highlighted
    pub active_handle: Option<Handle>,
    pub show_grid: bool,
}

impl CropEngine {
    /// Snapshot of the current geometry in viewport space
    pub fn render_state(&self) -> RenderState {
        let crop_rect = self.screen_crop_rect();
        RenderState {
            transform: self.transform,
            image_rect: self.transform.rect_to_screen(&Rect::from_size(self.image_size())),
            crop_rect,
            handles: Handle::RESIZE_HANDLES
                .into_iter()
                .map(|handle| (handle, handle.anchor(&crop_rect)))
                .collect(),
            active_handle: self.active_handle(),
            show_grid: self.show_grid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state_geometry() {
        let mut engine = CropEngine::with_defaults(1000, 500).unwrap();
        engine.set_viewport_size(500.0, 500.0);
        let state = engine.render_state();

        // scale 0.5, image letterboxed vertically
        assert!((state.image_rect.top - 125.0).abs() < 0.001);
        assert!((state.image_rect.bottom - 375.0).abs() < 0.001);
        assert!((state.crop_rect.left - 50.0).abs() < 0.001);
        assert!((state.crop_rect.top - 150.0).abs() < 0.001);
        assert_eq!(state.handles.len(), 8);
        assert!(!state.show_grid);
        assert!(state.active_handle.is_none());

        let (handle, anchor) = state.handles[0];
        assert_eq!(handle, Handle::TopLeft);
        assert!((anchor.x - 50.0).abs() < 0.001);
        assert!((anchor.y - 150.0).abs() < 0.001);
    }

    #[test]
    fn test_render_state_while_dragging() {
        let mut engine = CropEngine::with_defaults(1000, 1000).unwrap();
        engine.set_viewport_size(1000.0, 1000.0);
        engine.drag_start(Vec2::new(900.0, 500.0));

        let state = engine.render_state();
        assert!(state.show_grid);
        assert_eq!(state.active_handle, Some(Handle::Right));
    }
}
