pub mod constants;
mod crop;
mod intake;
mod io;
mod options;
pub mod pipeline;
mod raster;
pub mod render;
mod types;

pub use crop::{CropRect, centered_crop};
pub use intake::{load_photo, load_photos};
pub use io::{document_bytes, save_pdf};
pub use options::*;
pub use pipeline::{GeneratedSheet, Photo, generate, generate_from_job};
pub use raster::rasterize;
pub use render::render_document;
pub use types::*;
