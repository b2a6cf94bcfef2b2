//! Crop rectangle, its handles and hit testing

mod handle;
mod model;

pub use handle::{Edges, Handle};
pub use hit_test::hit_test;
pub use model::CropRectModel;
