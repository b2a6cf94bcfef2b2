//! Interactive crop-rectangle engine
//!
//! This crate provides the geometry and gesture logic behind an image crop
//! screen:
//! - Image space <-> viewport space transforms (pan/zoom)
//! - A crop rectangle that always stays inside the image and above a minimum size
//! - Hit testing for the eight resize handles and the interior
//! - Drag/resize gestures with auto-pan at the viewport edges
//! - Animated fit-image and center-crop transitions
//! - Integer pixel regions for the final slice
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`, `ViewTransform`)
//! - [`crop`]: Crop rectangle model, handles and hit testing
//! - [`input`]: Gesture state machine and drag session
//! - [`transition`]: Per-quantity tweens and the viewport animator
//! - [`autopan`]: Viewport correction during drags
//! - [`cropper`]: Pixel region conversion and the slicing trait
//! - [`persistence`]: State serialization for storage
//! - [`config`] and [`error`]: Tunables and error types
//!
//! ## Example
//!
//! ```rust
//! use crop_engine::{CropEngine, Vec2};
//!
//! let mut engine = CropEngine::with_defaults(1000, 1000).unwrap();
//! engine.set_viewport_size(1000.0, 1000.0);
//!
//! engine.handle_pointer_down(Vec2::new(500.0, 500.0));
//! engine.handle_pointer_move(Vec2::new(600.0, 500.0));
//! engine.handle_pointer_up(0.0);
//!
//! // Drive the re-centering animation from the frame clock
//! let mut now_ms = 0.0;
//! while engine.tick(now_ms) {
//!     now_ms += 16.0;
//! }
//!
//! let region = engine.crop_region();
//! assert_eq!((region.width, region.height), (800, 800));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: No rendering surface and no image decoding; hosts
//!    feed sizes and pointer positions and read geometry back
//! 2. **Time Abstraction**: Animations are ticked with an injected `now_ms`
//!    for deterministic testing
//! 3. **Total Arithmetic**: Degenerate input is clamped, never panics

pub mod autopan;
pub mod config;
pub mod crop;
pub mod cropper;
pub mod error;
pub mod input;
pub mod math;
pub mod persistence;
pub mod transition;

mod engine;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2, ViewTransform};
pub use crop::{hit_test, CropRectModel, Edges, Handle};
pub use input::{InputResult, InteractionController, InteractionSession, InteractionState};
pub use transition::{Quantity, TransitionGroup, ViewportAnimator};
pub use cropper::{crop_region, ImageSlicer, PixelRect};
pub use config::EngineConfig;
pub use error::{ConfigError, CropError, EngineError};
pub use persistence::Snapshot;

pub use engine::{CropEngine, RenderState};

/// Duration of viewport and crop rectangle animations in milliseconds
pub use config::DEFAULT_ANIMATION_DURATION_MS;
