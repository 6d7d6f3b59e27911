pub mod constants;
pub mod layout;
#[cfg(feature = "serde")]
mod serde_impls;
mod stats;
mod types;

pub use layout::{Layout, LayoutEngine, PageCursor, PlacementStrategy, layout};
pub use stats::calculate_statistics;
pub use types::*;
