use crate::constants::{
    DEFAULT_GAP_IN, DEFAULT_MARGIN_IN, DEFAULT_STEP_IN, LETTER_HEIGHT_IN, LETTER_WIDTH_IN,
    MIN_STEP_IN, mm_to_in,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid page spec: {0}")]
    InvalidPageSpec(String),
    #[error("Invalid print size: {0}")]
    InvalidPrintSize(String),
    #[error("Unknown print size: {0}")]
    UnknownPrintSize(String),
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Stable identifier of one photo across the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Standard photo print sizes, in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrintSize {
    Square2x2,
    Square3x3,
    Photo4x6,
    Photo5x7,
    Photo3_5x5,
    Photo8x10,
    Custom { width_in: f64, height_in: f64 },
}

impl PrintSize {
    /// Every named size, in display order
    pub const CATALOG: &'static [PrintSize] = &[
        PrintSize::Square2x2,
        PrintSize::Square3x3,
        PrintSize::Photo4x6,
        PrintSize::Photo5x7,
        PrintSize::Photo3_5x5,
        PrintSize::Photo8x10,
    ];

    /// Build a custom size, rejecting non-positive or non-finite dimensions
    pub fn custom(width_in: f64, height_in: f64) -> Result<Self> {
        if !(width_in.is_finite() && height_in.is_finite()) || width_in <= 0.0 || height_in <= 0.0
        {
            return Err(LayoutError::InvalidPrintSize(format!(
                "{}x{} must be positive",
                width_in, height_in
            )));
        }
        Ok(PrintSize::Custom {
            width_in,
            height_in,
        })
    }

    /// Width and height in inches
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            PrintSize::Square2x2 => (2.0, 2.0),
            PrintSize::Square3x3 => (3.0, 3.0),
            PrintSize::Photo4x6 => (4.0, 6.0),
            PrintSize::Photo5x7 => (5.0, 7.0),
            PrintSize::Photo3_5x5 => (3.5, 5.0),
            PrintSize::Photo8x10 => (8.0, 10.0),
            PrintSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }

    pub fn width_in(self) -> f64 {
        self.dimensions_in().0
    }

    pub fn height_in(self) -> f64 {
        self.dimensions_in().1
    }

    pub fn area_in2(self) -> f64 {
        let (w, h) = self.dimensions_in();
        w * h
    }

    /// Width divided by height
    pub fn aspect_ratio(self) -> f64 {
        let (w, h) = self.dimensions_in();
        w / h
    }

    /// Catalog key, e.g. `"4x6"`
    pub fn name(self) -> String {
        match self {
            PrintSize::Square2x2 => "2x2".to_string(),
            PrintSize::Square3x3 => "3x3".to_string(),
            PrintSize::Photo4x6 => "4x6".to_string(),
            PrintSize::Photo5x7 => "5x7".to_string(),
            PrintSize::Photo3_5x5 => "3.5x5".to_string(),
            PrintSize::Photo8x10 => "8x10".to_string(),
            PrintSize::Custom {
                width_in,
                height_in,
            } => format!("{}x{}", width_in, height_in),
        }
    }

    /// Human-readable label, e.g. `4×6"`
    pub fn label(self) -> String {
        let (w, h) = self.dimensions_in();
        format!("{}×{}\"", w, h)
    }
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for PrintSize {
    type Err = LayoutError;

    /// Accepts catalog names and arbitrary `WxH` inch pairs
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('×', "x");

        if let Some(size) = PrintSize::CATALOG
            .iter()
            .copied()
            .find(|size| size.name() == normalized)
        {
            return Ok(size);
        }

        let (w, h) = normalized
            .split_once('x')
            .ok_or_else(|| LayoutError::UnknownPrintSize(s.to_string()))?;
        let width_in: f64 = w
            .trim()
            .parse()
            .map_err(|_| LayoutError::UnknownPrintSize(s.to_string()))?;
        let height_in: f64 = h
            .trim()
            .trim_end_matches('"')
            .parse()
            .map_err(|_| LayoutError::UnknownPrintSize(s.to_string()))?;

        let parsed = PrintSize::custom(width_in, height_in)?;
        Ok(PrintSize::CATALOG
            .iter()
            .copied()
            .find(|size| size.dimensions_in() == parsed.dimensions_in())
            .unwrap_or(parsed))
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard output paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_in: f64, height_in: f64 },
}

impl PaperSize {
    /// Portrait dimensions in inches
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            PaperSize::A3 => (mm_to_in(297.0), mm_to_in(420.0)),
            PaperSize::A4 => (mm_to_in(210.0), mm_to_in(297.0)),
            PaperSize::A5 => (mm_to_in(148.0), mm_to_in(210.0)),
            PaperSize::Letter => (LETTER_WIDTH_IN, LETTER_HEIGHT_IN),
            PaperSize::Legal => (8.5, 14.0),
            PaperSize::Tabloid => (11.0, 17.0),
            PaperSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }

    /// Dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.dimensions_in();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Fixed page geometry, in inches
///
/// `margin_in` bounds the search region on every side; `gap_in` is the minimum
/// clearance between two placed items. `step_in` is the grid resolution used
/// while searching for a free position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageSpec {
    pub width_in: f64,
    pub height_in: f64,
    pub margin_in: f64,
    pub gap_in: f64,
    pub step_in: f64,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            width_in: LETTER_WIDTH_IN,
            height_in: LETTER_HEIGHT_IN,
            margin_in: DEFAULT_MARGIN_IN,
            gap_in: DEFAULT_GAP_IN,
            step_in: DEFAULT_STEP_IN,
        }
    }
}

impl PageSpec {
    pub fn new(width_in: f64, height_in: f64, margin_in: f64, gap_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            margin_in,
            gap_in,
            step_in: DEFAULT_STEP_IN,
        }
    }

    /// Page sized to a paper with the default margin and gap
    pub fn from_paper(paper: PaperSize, orientation: Orientation) -> Self {
        let (width_in, height_in) = paper.dimensions_with_orientation(orientation);
        Self {
            width_in,
            height_in,
            ..Default::default()
        }
    }

    /// Width and height of the area inside the margins
    pub fn usable_area(&self) -> (f64, f64) {
        (
            self.width_in - 2.0 * self.margin_in,
            self.height_in - 2.0 * self.margin_in,
        )
    }

    /// Reject geometry that leaves no usable area
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("width", self.width_in),
            ("height", self.height_in),
            ("margin", self.margin_in),
            ("gap", self.gap_in),
            ("step", self.step_in),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(LayoutError::InvalidPageSpec(format!(
                "{} must be a finite number",
                name
            )));
        }

        if self.width_in <= 0.0 || self.height_in <= 0.0 {
            return Err(LayoutError::InvalidPageSpec(format!(
                "page dimensions must be positive, got {}x{}",
                self.width_in, self.height_in
            )));
        }
        if self.margin_in < 0.0 {
            return Err(LayoutError::InvalidPageSpec(
                "margin must not be negative".to_string(),
            ));
        }
        if self.gap_in < 0.0 {
            return Err(LayoutError::InvalidPageSpec(
                "gap must not be negative".to_string(),
            ));
        }
        if self.step_in < MIN_STEP_IN {
            return Err(LayoutError::InvalidPageSpec(format!(
                "grid step must be at least {} in, got {}",
                MIN_STEP_IN, self.step_in
            )));
        }

        let (usable_w, usable_h) = self.usable_area();
        if usable_w <= 0.0 || usable_h <= 0.0 {
            return Err(LayoutError::InvalidPageSpec(format!(
                "margin {} leaves no usable area on a {}x{} page",
                self.margin_in, self.width_in, self.height_in
            )));
        }

        Ok(())
    }
}

/// One photo waiting for layout
///
/// `content` is whatever handle the caller uses for the rasterized image. An
/// item without content or without a size is skipped, not rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<C> {
    pub id: ItemId,
    pub content: Option<C>,
    pub size: Option<PrintSize>,
}

impl<C> Item<C> {
    pub fn new(id: ItemId, content: Option<C>, size: Option<PrintSize>) -> Self {
        Self { id, content, size }
    }

    /// Item with both content and size assigned
    pub fn ready(id: ItemId, content: C, size: PrintSize) -> Self {
        Self {
            id,
            content: Some(content),
            size: Some(size),
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.content.is_some() && self.size.is_some()
    }
}

/// Top-left corner of a candidate position, in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Final position of one item
///
/// Coordinates are inches from the page's top-left corner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub page_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub item_id: ItemId,
    /// Index of the originating item in the input slice
    pub item_index: usize,
}

impl Placement {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Why an item produced no placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    /// Missing rasterized content or a print size
    Ineligible,
    /// Larger than the usable area even on an empty page
    Unplaceable,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedItem {
    pub item_id: ItemId,
    pub item_index: usize,
    pub reason: SkipReason,
}

/// Statistics about a finished layout
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutStatistics {
    /// Items handed to the engine
    pub input_items: usize,
    /// Items that received a placement
    pub placed_items: usize,
    /// Items skipped for missing content or size
    pub ineligible_items: usize,
    /// Items too large for the usable area
    pub unplaceable_items: usize,
    /// Number of output pages
    pub pages: usize,
    /// Fraction of each page's usable area covered by photos
    pub coverage_per_page: Vec<f64>,
}
