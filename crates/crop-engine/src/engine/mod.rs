//! Crop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer events, drag sessions and auto-pan
//! - `animation`: Fit, center-crop and reset transitions, frame ticking
//! - `rendering`: Screen-space geometry for the renderer
//! - `persist`: Snapshot export and restore

mod animation;
mod input;
mod persist;
mod rendering;

use log::{debug, info};
use crate::config::EngineConfig;
use crate::crop::{CropRectModel, Handle};
use crate::cropper::{crop_region, ImageSlicer, PixelRect};
use crate::error::{CropError, EngineError};
use crate::input::{InteractionController, InteractionState};
use crate::math::{Rect, Size, ViewTransform};
use crate::transition::ViewportAnimator;

pub use rendering::RenderState;

/// Interactive crop engine for one image
///
/// Owns:
/// - The crop rectangle model (image space)
/// - The view transform mapping image space to the viewport
/// - The gesture state machine
/// - The animator; dropping the engine cancels every running tween
pub struct CropEngine {
    pub(crate) config: EngineConfig,
    pub(crate) image_width: u32,
    pub(crate) image_height: u32,
    pub(crate) model: CropRectModel,
    pub(crate) transform: ViewTransform,
    pub(crate) viewport: Size,
    /// Set once the first non-empty layout has snapped the fit transform
    pub(crate) initialized: bool,
    pub(crate) input: InteractionController,
    pub(crate) animator: ViewportAnimator,
}

impl CropEngine {
    /// Create an engine for an image of `width` x `height` pixels
    pub fn new(width: u32, height: u32, config: EngineConfig) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidImageSize { width, height });
        }
        config.validate()?;

        let image_size = Size::new(width as f32, height as f32);
        let model = CropRectModel::new(
            image_size,
            config.min_crop_size_px(),
            config.initial_coverage,
        );
        info!(
            "crop engine created for {}x{} image, initial rect {:?}",
            width,
            height,
            model.current_rect()
        );

        Ok(Self {
            image_width: width,
            image_height: height,
            model,
            transform: ViewTransform::IDENTITY,
            viewport: Size::ZERO,
            initialized: false,
            input: InteractionController::new(),
            animator: ViewportAnimator::new(config.animation_duration_ms),
            config,
        })
    }

    /// Create an engine with [`EngineConfig::default`]
    pub fn with_defaults(width: u32, height: u32) -> Result<Self, EngineError> {
        Self::new(width, height, EngineConfig::default())
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Image size in pixels as floats
    #[inline]
    pub fn image_size(&self) -> Size {
        self.model.image_size()
    }

    #[inline]
    pub fn image_dimensions(&self) -> (u32, u32) {
        (self.image_width, self.image_height)
    }

    #[inline]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Update the viewport size from layout
    ///
    /// The first non-empty size snaps the transform to fit the image. Later
    /// updates leave the transform alone.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        if !(width.is_finite() && height.is_finite()) {
            debug!("ignoring non-finite viewport size {}x{}", width, height);
            return;
        }
        debug!("viewport size {}x{}", width, height);
        self.viewport = size;

        if self.initialized {
            return;
        }
        if let Some(fit) = ViewTransform::fit(self.image_size(), size) {
            self.transform = fit;
            self.initialized = true;
            info!("initial fit: scale {} offset {:?}", fit.scale, fit.offset);
        }
    }

    /// Check if the first layout has fitted the image
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Crop rectangle in image space
    #[inline]
    pub fn crop_rect(&self) -> Rect {
        self.model.current_rect()
    }

    /// Crop rectangle in viewport space
    #[inline]
    pub fn screen_crop_rect(&self) -> Rect {
        self.transform.rect_to_screen(&self.model.current_rect())
    }

    /// Default centered rectangle for this image
    pub fn default_rect(&self) -> Rect {
        self.model.reset_rect()
    }

    /// Check if a pointer is down over the rectangle or a handle
    #[inline]
    pub fn is_interacting(&self) -> bool {
        self.input.is_touching()
    }

    /// Whether the rule-of-thirds grid should be drawn
    #[inline]
    pub fn show_grid(&self) -> bool {
        self.input.show_grid()
    }

    #[inline]
    pub fn active_handle(&self) -> Option<Handle> {
        self.input.active_handle()
    }

    #[inline]
    pub fn interaction_state(&self) -> InteractionState {
        self.input.state()
    }

    /// Integer pixel region of the current crop rectangle
    pub fn crop_region(&self) -> PixelRect {
        let region = crop_region(&self.model.current_rect(), self.image_width, self.image_height);
        debug!("crop region {:?}", region);
        region
    }

    /// Extract the current crop region from `source`
    ///
    /// `source` must have the dimensions the engine was created with.
    pub fn crop<S: ImageSlicer>(&self, source: &S) -> Result<S::Output, CropError> {
        let (actual_width, actual_height) = source.dimensions();
        if (actual_width, actual_height) != (self.image_width, self.image_height) {
            return Err(CropError::SourceMismatch {
                expected_width: self.image_width,
                expected_height: self.image_height,
                actual_width,
                actual_height,
            });
        }
        source.slice(self.crop_region())
    }
}
