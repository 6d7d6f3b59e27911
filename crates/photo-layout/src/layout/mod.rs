//! Page layout for print-ready photos
//!
//! This module assigns every eligible photo a page and a position:
//! - Ordering (largest print area first, stable on ties)
//! - Position search on the current page (a pluggable strategy)
//! - Page overflow (start a new page and anchor the photo at its top)

mod engine;
mod strategy;
mod types;

pub use engine::*;
pub use strategy::*;
pub use types::*;
