use image::DynamicImage;
use photo_layout::{ItemId, LayoutError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Crop {width}x{height}+{x}+{y} is outside the {image_width}x{image_height} image")]
    CropOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
    #[error("Too many photos: {count} (maximum {max})")]
    TooManyPhotos { count: usize, max: usize },
    #[error("No photos to print")]
    NoPhotos,
    #[error("Placement refers to photo {0} which has no rasterized image")]
    MissingImage(ItemId),
}

pub type Result<T> = std::result::Result<T, PrintError>;

/// A decoded photo as it came off disk
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub id: ItemId,
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl SourceImage {
    /// File name for log messages
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A cropped photo re-encoded as JPEG at its print resolution
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub jpeg: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}
