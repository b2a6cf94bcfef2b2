//! Pixel region extraction
//!
//! Converts the float crop rectangle into integer pixel bounds and hands them
//! to an [`ImageSlicer`], which owns the actual pixel copy.

use serde::{Deserialize, Serialize};
use crate::error::CropError;
use crate::math::Rect;

/// Integer pixel region inside the source image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check the region lies within a `width` x `height` buffer
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= width && b <= height)
    }
}

/// Clamp a crop rectangle to integer pixel bounds
///
/// The origin is floored and kept inside the image; the size is rounded and
/// kept between one pixel and whatever remains to the image edge. The result
/// is never empty and never out of bounds for a non-empty image.
pub fn crop_region(rect: &Rect, image_width: u32, image_height: u32) -> PixelRect {
    let (x, width) = axis_region(rect.left, rect.width(), image_width);
    let (y, height) = axis_region(rect.top, rect.height(), image_height);
    PixelRect::new(x, y, width, height)
}

fn axis_region(start: f32, length: f32, extent: u32) -> (u32, u32) {
    let extent = extent.max(1);
    // `as` saturates, NaN maps to 0
    let start = (start.floor().max(0.0) as u32).min(extent - 1);
    let length = (length.round().max(1.0) as u32).clamp(1, extent - start);
    (start, length)
}

/// Pixel buffer that can hand out a sub-region
pub trait ImageSlicer {
    type Output;

    /// Buffer width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Copy out `region`
    fn slice(&self, region: PixelRect) -> Result<Self::Output, CropError>;
}

/// Reject empty or out-of-bounds regions before touching pixels
pub fn check_region(region: PixelRect, width: u32, height: u32) -> Result<(), CropError> {
    if region.is_empty() {
        return Err(CropError::EmptyRegion);
    }
    if !region.fits_within(width, height) {
        return Err(CropError::RegionOutOfBounds { region, width, height });
    }
    Ok(())
}

#[cfg(feature = "image")]
impl ImageSlicer for image::DynamicImage {
    type Output = image::DynamicImage;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn slice(&self, region: PixelRect) -> Result<Self::Output, CropError> {
        check_region(region, self.width(), self.height())?;
        Ok(self.crop_imm(region.x, region.y, region.width, region.height))
    }
}
