//! Shared constants for the print pipeline

/// Print resolution used to size rasterized photos
pub const DEFAULT_DPI: u32 = 300;

/// Highest resolution the rasterizer accepts
pub const MAX_DPI: u32 = 1200;

/// JPEG quality for re-encoded photos (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Photos accepted in a single job
pub const MAX_PHOTOS: usize = 8;

/// PDF version written by the document writer
pub const PDF_VERSION: &str = "1.7";
