//! Image XObject creation
//!
//! Rasterized photos are already JPEG, so they are embedded as-is with the
//! `DCTDecode` filter instead of being decoded and recompressed.

use crate::types::RasterImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Add a JPEG photo to `output` as an Image XObject and return its id.
pub fn create_image_xobject(output: &mut Document, raster: &RasterImage) -> ObjectId {
    let dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(raster.width_px as i64)),
        ("Height", Object::Integer(raster.height_px as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
        ("Filter", Object::Name(b"DCTDecode".to_vec())),
    ]);

    // Already compressed; keep lopdf from deflating it again
    let stream = Stream::new(dict, raster.jpeg.clone()).with_compression(false);
    output.add_object(stream)
}
