use crate::constants::{DEFAULT_DPI, DEFAULT_JPEG_QUALITY, MAX_DPI, MAX_PHOTOS};
use crate::crop::CropRect;
use crate::types::*;
use photo_layout::{PageSpec, PrintSize};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How cropped photos are turned into JPEG payloads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Pixels per printed inch
    pub dpi: u32,
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl RasterOptions {
    /// Pixel buffer size for a photo printed at `size`
    pub fn pixel_dimensions(&self, size: PrintSize) -> (u32, u32) {
        let (w, h) = size.dimensions_in();
        let to_px = |inches: f64| ((inches * self.dpi as f64).round() as u32).max(1);
        (to_px(w), to_px(h))
    }

    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 || self.dpi > MAX_DPI {
            return Err(PrintError::Config(format!(
                "DPI must be between 1 and {}, got {}",
                MAX_DPI, self.dpi
            )));
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(PrintError::Config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

/// One photo in a job file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSpec {
    pub path: PathBuf,
    /// Photos without a size are left out of the layout
    #[serde(default)]
    pub size: Option<PrintSize>,
    /// Explicit crop; a centered crop is used when absent
    #[serde(default)]
    pub crop: Option<CropRect>,
}

/// A complete print job
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobOptions {
    pub photos: Vec<PhotoSpec>,
    pub page: PageSpec,
    pub raster: RasterOptions,
    pub output: Option<PathBuf>,
}

impl JobOptions {
    /// Load options from JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PrintError::Config(format!("Failed to parse job file: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PrintError::Config(format!("Failed to serialize job file: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.photos.is_empty() {
            return Err(PrintError::NoPhotos);
        }
        if self.photos.len() > MAX_PHOTOS {
            return Err(PrintError::TooManyPhotos {
                count: self.photos.len(),
                max: MAX_PHOTOS,
            });
        }

        self.page.validate()?;
        self.raster.validate()?;

        Ok(())
    }
}
