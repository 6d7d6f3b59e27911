//! Cutting crops out of source photos and re-encoding them for print

use crate::crop::CropRect;
use crate::options::RasterOptions;
use crate::types::{RasterImage, Result};
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use photo_layout::PrintSize;

/// Crop `image`, resample it to `size` at the configured DPI and encode it as JPEG.
///
/// This is CPU-bound; async callers should run it on a blocking task.
pub fn rasterize(
    image: &DynamicImage,
    crop: CropRect,
    size: PrintSize,
    options: &RasterOptions,
) -> Result<RasterImage> {
    options.validate()?;
    crop.validate(image.width(), image.height())?;

    let (width_px, height_px) = options.pixel_dimensions(size);

    let cropped = image.crop_imm(crop.x, crop.y, crop.width, crop.height);
    let resized = cropped.resize_exact(width_px, height_px, FilterType::Lanczos3);

    // JPEG has no alpha channel
    let rgb = resized.to_rgb8();
    let mut jpeg = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, options.jpeg_quality))?;

    Ok(RasterImage {
        jpeg,
        width_px,
        height_px,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn low_res() -> RasterOptions {
        RasterOptions {
            dpi: 10,
            jpeg_quality: 80,
        }
    }

    #[test]
    fn test_rasterize_scales_to_print_size() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(120, 90, Rgb([10, 200, 30])));
        let crop = CropRect::new(10, 0, 60, 90);

        let raster = rasterize(&image, crop, PrintSize::Photo4x6, &low_res()).unwrap();
        assert_eq!((raster.width_px, raster.height_px), (40, 60));

        let decoded = image::load_from_memory(&raster.jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 60));
    }

    #[test]
    fn test_rasterize_drops_alpha() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(20, 20, Rgba([1, 2, 3, 128])));
        let raster =
            rasterize(&image, CropRect::full(20, 20), PrintSize::Square2x2, &low_res()).unwrap();

        // JPEG SOI marker
        assert_eq!(&raster.jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_rasterize_rejects_crop_outside_image() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(20, 20));
        let result = rasterize(
            &image,
            CropRect::new(10, 10, 20, 20),
            PrintSize::Square2x2,
            &low_res(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_pixel_dimensions_follow_dpi() {
        let options = RasterOptions::default();
        assert_eq!(options.pixel_dimensions(PrintSize::Photo3_5x5), (1050, 1500));
    }
}
