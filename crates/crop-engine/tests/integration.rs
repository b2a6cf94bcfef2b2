//! Integration tests for CropEngine
//!
//! These tests verify the full crop workflow including:
//! - Default rectangle and crop regions for small and large images
//! - Move and resize gestures through both input channels
//! - Auto-pan at the viewport edges
//! - Center-crop, fit and reset transitions
//! - Snapshot round trips

use crop_engine::{
    CropEngine, CropError, EngineConfig, Handle, ImageSlicer, InputResult, InteractionState,
    PixelRect, Rect, Snapshot, Vec2, ViewTransform, DEFAULT_ANIMATION_DURATION_MS,
};

fn engine_with_viewport(width: u32, height: u32, vw: f32, vh: f32) -> CropEngine {
    let mut engine = CropEngine::with_defaults(width, height).unwrap();
    engine.set_viewport_size(vw, vh);
    engine
}

fn assert_invariants(engine: &CropEngine) {
    let r = engine.crop_rect();
    let img = engine.image_size();
    assert!(r.left >= 0.0 && r.left < r.right && r.right <= img.width, "{r:?}");
    assert!(r.top >= 0.0 && r.top < r.bottom && r.bottom <= img.height, "{r:?}");
    assert!(r.width() >= img.width.min(100.0) - 0.001, "{r:?}");
    assert!(r.height() >= img.height.min(100.0) - 0.001, "{r:?}");
}

/// Run ticks every 16 ms starting at `from_ms` until everything settles
fn settle(engine: &mut CropEngine, from_ms: f64) -> f64 {
    let mut now = from_ms;
    while engine.tick(now) {
        now += 16.0;
    }
    now
}

/// Slicer that returns the region it was asked for
struct RegionSlicer {
    width: u32,
    height: u32,
}

impl ImageSlicer for RegionSlicer {
    type Output = PixelRect;

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn slice(&self, region: PixelRect) -> Result<PixelRect, CropError> {
        crop_engine::cropper::check_region(region, self.width, self.height)?;
        Ok(region)
    }
}

// =============================================================================
// Default Rectangle Tests
// =============================================================================

#[test]
fn test_small_image_min_size_dominates() {
    let engine = CropEngine::with_defaults(100, 100).unwrap();
    let region = engine.crop(&RegionSlicer { width: 100, height: 100 }).unwrap();

    assert_eq!(region, PixelRect::new(0, 0, 100, 100));
}

#[test]
fn test_image_smaller_than_min_size() {
    let engine = CropEngine::with_defaults(80, 80).unwrap();
    let region = engine.crop(&RegionSlicer { width: 80, height: 80 }).unwrap();

    assert_eq!(region, PixelRect::new(0, 0, 80, 80));
}

#[test]
fn test_default_rect_centered() {
    let engine = CropEngine::with_defaults(1000, 1000).unwrap();
    let r = engine.crop_rect();

    assert!((r.left - 100.0).abs() < 0.001);
    assert!((r.top - 100.0).abs() < 0.001);
    assert!((r.width() - 800.0).abs() < 0.001);
    assert!((r.height() - 800.0).abs() < 0.001);
    assert_eq!(engine.default_rect(), engine.default_rect());
}

// =============================================================================
// Gesture Tests
// =============================================================================

#[test]
fn test_interior_drag_keeps_size() {
    let mut engine = engine_with_viewport(1000, 1000, 1000.0, 1000.0);

    engine.drag_start(Vec2::new(500.0, 500.0));
    engine.drag_move(Vec2::new(700.0, 500.0));
    engine.drag_end(0.0);

    let r = engine.crop_rect();
    assert!((r.left - 200.0).abs() < 0.001);
    assert!((r.right - 1000.0).abs() < 0.001);

    let region = engine.crop_region();
    assert_eq!(region.width, 800);
    assert_eq!(region.height, 800);
}

#[test]
fn test_interior_drag_clamped_to_image() {
    let mut engine = engine_with_viewport(1000, 1000, 1000.0, 1000.0);

    engine.drag_start(Vec2::new(500.0, 500.0));
    engine.drag_move(Vec2::new(900.0, 500.0));

    let r = engine.crop_rect();
    assert!((r.right - 1000.0).abs() < 0.001);
    assert!((r.width() - 800.0).abs() < 0.001);
}

#[test]
fn test_corner_drag_min_size_floor() {
    let mut engine = engine_with_viewport(1000, 1000, 1000.0, 1000.0);
    let start = engine.crop_rect();

    // Bottom-right corner dragged to leave a 40 px wide rectangle
    engine.drag_start(Vec2::new(900.0, 900.0));
    engine.drag_move(Vec2::new(140.0, 900.0));

    let r = engine.crop_rect();
    assert!((r.width() - 100.0).abs() < 0.001);
    assert!((r.left - start.left).abs() < 0.001);
    assert!((r.top - start.top).abs() < 0.001);
    assert!((r.bottom - start.bottom).abs() < 0.001);
}

#[test]
fn test_diagonal_floor_clamps_each_axis() {
    let mut engine = engine_with_viewport(1000, 1000, 1000.0, 1000.0);

    engine.drag_start(Vec2::new(100.0, 100.0));
    engine.drag_move(Vec2::new(2000.0, 2000.0));

    let r = engine.crop_rect();
    assert!((r.left - 800.0).abs() < 0.001);
    assert!((r.top - 800.0).abs() < 0.001);
    assert!((r.right - 900.0).abs() < 0.001);
    assert!((r.bottom - 900.0).abs() < 0.001);
}

#[test]
fn test_every_handle_holds_invariants() {
    let points = [
        Vec2::new(-400.0, 30.0),
        Vec2::new(1400.0, -300.0),
        Vec2::new(3.0, 1200.0),
        Vec2::new(500.0, 500.0),
    ];
    for handle in Handle::RESIZE_HANDLES.into_iter().chain([Handle::Center]) {
        let mut engine = engine_with_viewport(640, 480, 640.0, 480.0);
        let anchor = handle.anchor(&engine.screen_crop_rect());
        let grab = if handle == Handle::Center {
            engine.screen_crop_rect().center()
        } else {
            anchor
        };

        let result = engine.drag_start(grab);
        assert_eq!(result, InputResult::DragStarted { handle });
        for point in points {
            engine.drag_move(point);
            assert_invariants(&engine);
        }
        engine.drag_end(0.0);
        settle(&mut engine, 0.0);
        assert_invariants(&engine);
    }
}

#[test]
fn test_stray_move_ignored() {
    let mut engine = engine_with_viewport(1000, 1000, 1000.0, 1000.0);
    let before = engine.crop_rect();

    assert_eq!(engine.drag_move(Vec2::new(10.0, 10.0)), InputResult::Unhandled);
    assert_eq!(engine.crop_rect(), before);
    assert_eq!(engine.interaction_state(), InteractionState::Idle);
}

#[test]
fn test_raw_stream_full_gesture() {
    let mut engine = engine_with_viewport(1000, 1000, 1000.0, 1000.0);

    assert!(engine.handle_pointer_down(Vec2::new(500.0, 100.0)).is_handled());
    assert!(engine.is_interacting());

    let result = engine.handle_pointer_move(Vec2::new(500.0, 150.0));
    assert_eq!(result, InputResult::DragStarted { handle: Handle::Top });
    engine.handle_pointer_move(Vec2::new(500.0, 200.0));
    assert!((engine.crop_rect().top - 200.0).abs() < 0.001);

    let result = engine.handle_pointer_up(0.0);
    assert_eq!(result, InputResult::DragEnded { handle: Handle::Top });
    assert!(!engine.is_interacting());
    assert!(!engine.show_grid());
}

#[test]
fn test_raw_stream_miss_is_inert() {
    let mut engine = engine_with_viewport(1000, 1000, 1000.0, 1000.0);
    let before = engine.crop_rect();

    assert_eq!(engine.handle_pointer_down(Vec2::new(20.0, 20.0)), InputResult::Unhandled);
    assert_eq!(engine.handle_pointer_move(Vec2::new(500.0, 500.0)), InputResult::Unhandled);
    assert_eq!(engine.handle_pointer_move(Vec2::new(600.0, 500.0)), InputResult::Unhandled);
    assert_eq!(engine.handle_pointer_up(0.0), InputResult::Unhandled);

    assert_eq!(engine.crop_rect(), before);
    assert!(!engine.is_animating());
}

// =============================================================================
// Auto-pan Tests
// =============================================================================

#[test]
fn test_auto_pan_never_exposes_past_image_left() {
    let mut engine = engine_with_viewport(1000, 1000, 400.0, 400.0);
    // Zoomed in with the image's left edge 20 px off-screen
    engine.restore(Snapshot::new(
        Rect::new(100.0, 100.0, 300.0, 300.0),
        ViewTransform::new(2.0, Vec2::new(-20.0, -100.0)),
    ))
    .unwrap();

    // Interior of the rect on screen is 180..580 horizontally
    engine.drag_start(Vec2::new(300.0, 300.0));
    for x in [250.0, 150.0, 50.0, -100.0] {
        engine.drag_move(Vec2::new(x, 300.0));
        let t = engine.transform();
        assert!(t.offset.x <= 0.001, "image left edge entered the viewport: {t:?}");
    }

    let r = engine.crop_rect();
    assert!((r.left - 0.0).abs() < 0.001);
    assert!((engine.transform().offset.x - 0.0).abs() < 0.001);
}

#[test]
fn test_auto_pan_tracks_right_edge() {
    let mut engine = engine_with_viewport(1000, 1000, 400.0, 400.0);
    engine.restore(Snapshot::new(
        Rect::new(100.0, 100.0, 300.0, 300.0),
        ViewTransform::new(1.0, Vec2::ZERO),
    ))
    .unwrap();

    engine.drag_start(Vec2::new(300.0, 200.0));
    engine.drag_move(Vec2::new(450.0, 200.0));

    // Rect right edge would sit at 450 on screen; view pans left by 50
    assert!((engine.transform().offset.x + 50.0).abs() < 0.001);
    assert!((engine.screen_crop_rect().right - 400.0).abs() < 0.001);
    assert!((engine.crop_rect().right - 450.0).abs() < 0.001);
}

// =============================================================================
// Transition Tests
// =============================================================================

#[test]
fn test_drag_end_centers_crop() {
    let mut engine = engine_with_viewport(1000, 1000, 500.0, 500.0);

    engine.drag_start(Vec2::new(450.0, 450.0));
    engine.drag_move(Vec2::new(250.0, 250.0));
    engine.drag_end(0.0);
    settle(&mut engine, 0.0);

    let screen = engine.screen_crop_rect();
    let center = screen.center();
    assert!((center.x - 250.0).abs() < 0.01);
    assert!((center.y - 250.0).abs() < 0.01);
    // Square rect in a square viewport fills it up to the margin
    assert!((screen.left - 32.0).abs() < 0.01);
    assert!((screen.right - 468.0).abs() < 0.01);
}

#[test]
fn test_reset_settles_to_initial_state() {
    let mut engine = engine_with_viewport(1000, 500, 500.0, 500.0);
    let initial_transform = engine.transform();
    let initial_rect = engine.crop_rect();

    engine.drag_start(engine.screen_crop_rect().center());
    engine.drag_move(Vec2::new(100.0, 250.0));
    engine.drag_end(0.0);
    settle(&mut engine, 0.0);
    assert_ne!(engine.crop_rect(), initial_rect);

    let group = engine.reset(1000.0);
    assert!(!engine.is_group_settled(&group));
    engine.tick(1000.0 + DEFAULT_ANIMATION_DURATION_MS as f64 / 2.0);
    assert!(!engine.is_group_settled(&group));
    engine.tick(1000.0 + DEFAULT_ANIMATION_DURATION_MS as f64);

    assert!(engine.is_group_settled(&group));
    let r = engine.crop_rect();
    assert!((r.left - initial_rect.left).abs() < 0.001);
    assert!((r.right - initial_rect.right).abs() < 0.001);
    let t = engine.transform();
    assert!((t.scale - initial_transform.scale).abs() < 0.001);
    assert!((t.offset.y - initial_transform.offset.y).abs() < 0.001);
}

#[test]
fn test_rapid_drag_end_start_end() {
    let mut engine = engine_with_viewport(1000, 1000, 500.0, 500.0);

    engine.drag_start(Vec2::new(250.0, 250.0));
    engine.drag_move(Vec2::new(300.0, 250.0));
    engine.drag_end(0.0);
    engine.tick(40.0);

    engine.drag_start(Vec2::new(250.0, 250.0));
    engine.drag_move(Vec2::new(200.0, 250.0));
    engine.drag_end(80.0);

    let end = settle(&mut engine, 96.0);
    assert!(end >= 380.0);

    let target = ViewTransform::center_on(&engine.crop_rect(), engine.viewport_size(), 32.0).unwrap();
    let t = engine.transform();
    assert!((t.scale - target.scale).abs() < 0.001);
    assert!((t.offset.x - target.offset.x).abs() < 0.01);
    assert!((t.offset.y - target.offset.y).abs() < 0.01);
}

#[test]
fn test_zero_viewport_is_noop() {
    let mut engine = CropEngine::with_defaults(1000, 1000).unwrap();
    let before = engine.crop_rect();

    assert!(engine.fit_image_to_viewport(0.0).is_empty());
    assert!(engine.center_crop_on_viewport(0.0).is_empty());
    assert_eq!(engine.drag_start(Vec2::new(500.0, 500.0)), InputResult::Unhandled);

    // Reset still animates the rectangle
    let group = engine.reset(0.0);
    assert_eq!(group.len(), 4);
    settle(&mut engine, 0.0);
    assert_eq!(engine.crop_rect(), before);
    assert_eq!(engine.transform(), ViewTransform::IDENTITY);
}

// =============================================================================
// Config and Persistence Tests
// =============================================================================

#[test]
fn test_engine_from_json_config() {
    let config = EngineConfig::from_json(r#"{"min_crop_size_dp": 50, "density": 2.0}"#).unwrap();
    let mut engine = CropEngine::new(1000, 1000, config).unwrap();
    engine.set_viewport_size(1000.0, 1000.0);

    engine.drag_start(Vec2::new(900.0, 500.0));
    engine.drag_move(Vec2::new(0.0, 500.0));
    assert!((engine.crop_rect().width() - 100.0).abs() < 0.001);
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut engine = engine_with_viewport(1200, 900, 600.0, 450.0);
    engine.drag_start(engine.screen_crop_rect().center());
    engine.drag_move(engine.screen_crop_rect().center() + Vec2::new(30.0, 10.0));
    engine.drag_end(0.0);
    settle(&mut engine, 0.0);

    let json = engine.snapshot().to_json().unwrap();
    let mut restored = CropEngine::with_defaults(1200, 900).unwrap();
    restored.restore(Snapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.crop_region(), engine.crop_region());
    assert!((restored.transform().scale - engine.transform().scale).abs() < 0.001);
}
