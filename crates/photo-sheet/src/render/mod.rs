//! PDF rendering for laid-out photos
//!
//! This module handles all PDF-specific operations:
//! - Embedding JPEG payloads as Image XObjects
//! - Building one output page per layout page
//! - Converting top-left inch coordinates to PDF user space

mod document;
mod page;
mod xobject;

pub use document::render_document;
pub use page::{placement_command, render_page};
pub use xobject::create_image_xobject;
