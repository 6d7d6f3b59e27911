//! Shared constants for photo layout
//!
//! All geometry in this crate is expressed in inches; points only appear
//! at the document-writing boundary.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch (PDF user space)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

/// Convert millimeters to inches
#[inline]
pub fn mm_to_in(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

// =============================================================================
// Default Page Geometry
// =============================================================================

/// US Letter width in inches
pub const LETTER_WIDTH_IN: f64 = 8.5;

/// US Letter height in inches
pub const LETTER_HEIGHT_IN: f64 = 11.0;

/// Default margin on every page edge
pub const DEFAULT_MARGIN_IN: f64 = 0.5;

/// Default minimum clearance between two photos
pub const DEFAULT_GAP_IN: f64 = 0.25;

// =============================================================================
// Position Search
// =============================================================================

/// Grid resolution of the first-fit scan
pub const DEFAULT_STEP_IN: f64 = 0.1;

/// Finest grid step accepted; the scan cost grows with the inverse square
/// of the step.
pub const MIN_STEP_IN: f64 = 0.01;

/// Slack allowed on the scan's upper bounds so a photo exactly as large as
/// the usable area still gets its single candidate position.
pub const GRID_TOLERANCE_IN: f64 = 1e-9;
