//! Persistence module for state serialization
//!
//! Provides snapshot export/import for the crop rectangle and view.

mod snapshot;

pub use snapshot::Snapshot;
