//! Engine configuration
//!
//! Sizes are given in density-independent units and converted to pixels with
//! [`EngineConfig::density`] when the engine reads them.

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;

/// Default minimum crop edge, in dp
pub const DEFAULT_MIN_CROP_SIZE_DP: f32 = 100.0;

/// Default fraction of each image axis covered by the initial crop rectangle
pub const DEFAULT_INITIAL_COVERAGE: f32 = 0.8;

/// Default handle hit radius, in dp
pub const DEFAULT_HIT_RADIUS_DP: f32 = 24.0;

/// Default margin kept around the crop rectangle when centering it, in dp
pub const DEFAULT_CENTER_MARGIN_DP: f32 = 32.0;

/// Duration of viewport and crop rectangle animations in milliseconds
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 300;

/// Tunables for a [`CropEngine`](crate::CropEngine)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum crop edge length (dp)
    pub min_crop_size_dp: f32,
    /// Pixels per dp
    pub density: f32,
    /// Fraction of each image axis covered by the initial rectangle
    pub initial_coverage: f32,
    /// Handle hit radius (dp)
    pub hit_radius_dp: f32,
    /// Margin around the rectangle after center-crop-on-viewport (dp)
    pub center_margin_dp: f32,
    /// Pointer travel before a raw pointer stream becomes a drag (dp)
    pub touch_slop_dp: f32,
    /// Tween duration (ms)
    pub animation_duration_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_crop_size_dp: DEFAULT_MIN_CROP_SIZE_DP,
            density: 1.0,
            initial_coverage: DEFAULT_INITIAL_COVERAGE,
            hit_radius_dp: DEFAULT_HIT_RADIUS_DP,
            center_margin_dp: DEFAULT_CENTER_MARGIN_DP,
            touch_slop_dp: 0.0,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is within its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("min_crop_size_dp", self.min_crop_size_dp)?;
        positive("density", self.density)?;
        positive("hit_radius_dp", self.hit_radius_dp)?;
        non_negative("center_margin_dp", self.center_margin_dp)?;
        non_negative("touch_slop_dp", self.touch_slop_dp)?;

        if !(self.initial_coverage > 0.0 && self.initial_coverage <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "initial_coverage",
                reason: format!("{} is not in (0, 1]", self.initial_coverage),
            });
        }
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "animation_duration_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Minimum crop edge in pixels
    #[inline]
    pub fn min_crop_size_px(&self) -> f32 {
        self.min_crop_size_dp * self.density
    }

    /// Handle hit radius in pixels
    #[inline]
    pub fn hit_radius_px(&self) -> f32 {
        self.hit_radius_dp * self.density
    }

    /// Center-crop margin in pixels
    #[inline]
    pub fn center_margin_px(&self) -> f32 {
        self.center_margin_dp * self.density
    }

    /// Touch slop in pixels
    #[inline]
    pub fn touch_slop_px(&self) -> f32 {
        self.touch_slop_dp * self.density
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("{value} must be positive and finite"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("{value} must be zero or positive"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.min_crop_size_px() - 100.0).abs() < 0.001);
        assert_eq!(config.animation_duration_ms, DEFAULT_ANIMATION_DURATION_MS);
    }

    #[test]
    fn test_density_scales_pixel_values() {
        let config = EngineConfig {
            density: 2.5,
            ..Default::default()
        };
        assert!((config.min_crop_size_px() - 250.0).abs() < 0.001);
        assert!((config.hit_radius_px() - 60.0).abs() < 0.001);
        assert!((config.center_margin_px() - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{ "density": 3.0, "animation_duration_ms": 150 }"#).unwrap();
        assert!((config.density - 3.0).abs() < 0.001);
        assert_eq!(config.animation_duration_ms, 150);
        assert!((config.initial_coverage - DEFAULT_INITIAL_COVERAGE).abs() < 0.001);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = EngineConfig::from_json(r#"{ "initial_coverage": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "initial_coverage", .. }));

        let err = EngineConfig::from_json(r#"{ "density": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "density", .. }));

        let err = EngineConfig::from_json(r#"{ "animation_duration_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "animation_duration_ms", .. }));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
