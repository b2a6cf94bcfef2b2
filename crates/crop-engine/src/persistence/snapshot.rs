//! Snapshot serialization for crop state

use serde::{Deserialize, Serialize};
use crate::math::{Rect, ViewTransform};

/// Snapshot of crop state for persistence
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    /// Crop rectangle in image space
    pub crop_rect: Rect,
    /// View transform at the time of the snapshot
    #[serde(default)]
    pub transform: ViewTransform,
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(crop_rect: Rect, transform: ViewTransform) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            crop_rect,
            transform,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Check if snapshot was written by a newer version
    pub fn is_from_future(&self) -> bool {
        self.version > Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Version 0 stored the rect only; its transform is meaningless
        if self.version == 0 {
            self.transform = ViewTransform::IDENTITY;
        }
        self.version = Self::CURRENT_VERSION;
    }

    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
