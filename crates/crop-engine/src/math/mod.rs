//! Core geometry types for the crop engine
//!
//! Image space and viewport space share these types; [`ViewTransform`]
//! maps between them.

mod vec2;
mod rect;
mod size;
mod transform;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use transform::ViewTransform;
