//! Geometry types shared by the layout strategies and the page engine

use crate::types::{Placement, Position, PrintSize};

/// An axis-aligned rectangle in inches, origin at the page's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` with its top-left corner at `position`
    pub fn at(position: Position, size: PrintSize) -> Self {
        let (width, height) = size.dimensions_in();
        Self::new(position.x, position.y, width, height)
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether two rectangles are closer than `gap` on both axes.
    ///
    /// They are clear of each other iff one lies entirely left, right, above
    /// or below the other with at least `gap` in between.
    pub fn conflicts_with(&self, other: &Rect, gap: f64) -> bool {
        let clear = self.right() + gap <= other.x
            || other.right() + gap <= self.x
            || self.bottom() + gap <= other.y
            || other.bottom() + gap <= self.y;
        !clear
    }
}

impl From<&Placement> for Rect {
    fn from(placement: &Placement) -> Self {
        Rect::new(placement.x, placement.y, placement.width, placement.height)
    }
}
