//! Error types for the crop engine
//!
//! Geometry itself never fails; these cover the boundaries where the engine
//! talks to configuration, persisted state and the pixel slicing backend.

use crate::cropper::PixelRect;

/// Errors raised while loading or validating an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A field holds a value outside its accepted range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },

    /// The configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by [`CropEngine`](crate::CropEngine) construction and restore.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Image dimensions must both be positive.
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A snapshot cannot be applied to this engine.
    #[error("incompatible snapshot: {0}")]
    Snapshot(String),
}

/// Errors raised when extracting the cropped region.
#[derive(Debug, thiserror::Error)]
pub enum CropError {
    /// The region does not fit inside the source buffer.
    #[error("crop region {region:?} exceeds source bounds {width}x{height}")]
    RegionOutOfBounds {
        region: PixelRect,
        width: u32,
        height: u32,
    },

    /// The region has zero width or height.
    #[error("crop region is empty")]
    EmptyRegion,

    /// The slicer's buffer does not have the dimensions the engine was built for.
    #[error("source is {actual_width}x{actual_height}, engine expects {expected_width}x{expected_height}")]
    SourceMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}
