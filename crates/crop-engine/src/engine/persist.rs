//! Snapshot export and restore

use log::{debug, info};
use crate::error::EngineError;
use crate::persistence::Snapshot;
use super::CropEngine;

impl CropEngine {
    /// Capture the crop rectangle and view transform
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.model.current_rect(), self.transform)
    }

    /// Apply a snapshot taken earlier, possibly by an older version
    ///
    /// The rectangle is re-sanitised against this image. Running tweens and any
    /// drag in progress are dropped, and the transform counts as initialised so
    /// a later layout does not snap over it.
    pub fn restore(&mut self, mut snapshot: Snapshot) -> Result<(), EngineError> {
        if snapshot.is_from_future() {
            return Err(EngineError::Snapshot(format!(
                "version {} is newer than supported version {}",
                snapshot.version,
                Snapshot::CURRENT_VERSION
            )));
        }
        if snapshot.needs_migration() {
            debug!("migrating snapshot from version {}", snapshot.version);
            snapshot.migrate();
        }

        let transform = snapshot.transform;
        if !(transform.scale.is_finite() && transform.scale > 0.0 && transform.offset.is_finite()) {
            return Err(EngineError::Snapshot(format!(
                "invalid transform scale {} offset {:?}",
                transform.scale, transform.offset
            )));
        }

        self.cancel_animations();
        self.input.end();
        self.model.set_rect(snapshot.crop_rect);
        self.transform = transform;
        self.initialized = true;
        info!("restored rect {:?}", self.model.current_rect());
        Ok(())
    }
}
