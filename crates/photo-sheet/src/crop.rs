//! Crop rectangles in source-image pixels

use crate::types::{PrintError, Result};
use serde::{Deserialize, Serialize};

/// Pixel rectangle cut out of a source image, origin at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width` x `height` image
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Check that the rectangle is non-empty and lies inside the image
    pub fn validate(&self, image_width: u32, image_height: u32) -> Result<()> {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);

        let inside = matches!(
            (right, bottom),
            (Some(r), Some(b)) if r <= image_width && b <= image_height
        );

        if self.width == 0 || self.height == 0 || !inside {
            return Err(PrintError::CropOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width,
                image_height,
            });
        }
        Ok(())
    }
}

/// Largest centered rectangle of the given aspect ratio (width / height).
///
/// This is the crop a user gets without touching the crop handles.
pub fn centered_crop(image_width: u32, image_height: u32, aspect: f64) -> CropRect {
    let image_aspect = image_width as f64 / image_height as f64;

    if image_aspect > aspect {
        // Too wide: trim the sides
        let width = ((image_height as f64 * aspect).round() as u32).clamp(1, image_width);
        CropRect::new((image_width - width) / 2, 0, width, image_height)
    } else {
        // Too tall: trim top and bottom
        let height = ((image_width as f64 / aspect).round() as u32).clamp(1, image_height);
        CropRect::new(0, (image_height - height) / 2, image_width, height)
    }
}
