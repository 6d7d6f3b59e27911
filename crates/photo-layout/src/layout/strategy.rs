//! Position search on a single page
//!
//! A strategy only answers "where does this photo go on the current page?".
//! Ordering and page breaks live in the engine, so packers can be swapped
//! without touching either.

use crate::constants::GRID_TOLERANCE_IN;
use crate::types::{PageSpec, Position, PrintSize};

use super::Rect;

/// Finds a free position for a photo among the rectangles already used on a page.
///
/// Returning `None` means the page is full for this photo.
pub trait PlacementStrategy {
    fn find_position(&self, size: PrintSize, used: &[Rect], page: &PageSpec) -> Option<Position>;
}

impl<F> PlacementStrategy for F
where
    F: Fn(PrintSize, &[Rect], &PageSpec) -> Option<Position>,
{
    fn find_position(&self, size: PrintSize, used: &[Rect], page: &PageSpec) -> Option<Position> {
        self(size, used, page)
    }
}

/// First-fit scan over a fixed-step grid, row-major.
///
/// Candidate corners start at the margin and advance by `page.step_in` along x,
/// then along y. The first candidate that keeps `page.gap_in` clearance from
/// every used rectangle wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstFitGrid;

impl PlacementStrategy for FirstFitGrid {
    fn find_position(&self, size: PrintSize, used: &[Rect], page: &PageSpec) -> Option<Position> {
        let (width, height) = size.dimensions_in();
        let max_x = page.width_in - page.margin_in - width;
        let max_y = page.height_in - page.margin_in - height;

        grid_steps(page.margin_in, max_y, page.step_in).find_map(|y| {
            grid_steps(page.margin_in, max_x, page.step_in)
                .map(|x| Position { x, y })
                .find(|&position| {
                    let candidate = Rect::at(position, size);
                    !used
                        .iter()
                        .any(|other| candidate.conflicts_with(other, page.gap_in))
                })
        })
    }
}

/// Grid coordinates `start, start + step, ...` up to `end`.
///
/// Each value is computed from its index so rounding error does not
/// accumulate along a row.
fn grid_steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u64..)
        .map(move |i| start + i as f64 * step)
        .take_while(move |&value| value <= end + GRID_TOLERANCE_IN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> PageSpec {
        PageSpec::new(8.5, 11.0, 0.5, 0.25)
    }

    #[test]
    fn test_grid_steps_include_end() {
        let steps: Vec<f64> = grid_steps(0.5, 1.0, 0.1).collect();
        assert_eq!(steps.len(), 6);
        assert!((steps[5] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_grid_steps_empty_when_end_before_start() {
        assert_eq!(grid_steps(0.5, 0.2, 0.1).count(), 0);
    }

    #[test]
    fn test_empty_page_uses_first_candidate() {
        let position = FirstFitGrid
            .find_position(PrintSize::Photo4x6, &[], &letter())
            .unwrap();
        assert_eq!(position, Position { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_second_square_lands_right_of_first() {
        let used = [Rect::new(0.5, 0.5, 2.0, 2.0)];
        let position = FirstFitGrid
            .find_position(PrintSize::Square2x2, &used, &letter())
            .unwrap();

        // First grid column with x >= 0.5 + 2.0 + 0.25
        assert!((position.x - 2.8).abs() < 1e-6);
        assert!((position.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_full_row_wraps_to_next_row() {
        let used = [
            Rect::new(0.5, 0.5, 3.0, 3.0),
            Rect::new(3.8, 0.5, 3.0, 3.0),
        ];
        let position = FirstFitGrid
            .find_position(PrintSize::Square3x3, &used, &letter())
            .unwrap();

        assert!((position.x - 0.5).abs() < 1e-6);
        assert!(position.y >= 3.75 - 1e-9);
        assert!(position.y < 3.85);
    }

    #[test]
    fn test_no_position_when_page_is_full() {
        let used = [Rect::new(0.5, 0.5, 5.0, 7.0)];
        assert!(
            FirstFitGrid
                .find_position(PrintSize::Photo5x7, &used, &letter())
                .is_none()
        );
    }

    #[test]
    fn test_oversized_photo_has_no_candidates() {
        let size = PrintSize::custom(20.0, 20.0).unwrap();
        assert!(FirstFitGrid.find_position(size, &[], &letter()).is_none());
    }

    #[test]
    fn test_photo_exactly_filling_usable_area_fits() {
        let size = PrintSize::custom(7.5, 10.0).unwrap();
        let position = FirstFitGrid.find_position(size, &[], &letter()).unwrap();
        assert_eq!(position, Position { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_conflict_respects_gap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let touching = Rect::new(1.25, 0.0, 1.0, 1.0);
        let too_close = Rect::new(1.2, 0.0, 1.0, 1.0);
        let diagonal = Rect::new(1.1, 1.1, 1.0, 1.0);

        assert!(!a.conflicts_with(&touching, 0.25));
        assert!(a.conflicts_with(&too_close, 0.25));
        // Clearance on a single axis is enough
        assert!(a.conflicts_with(&diagonal, 0.25));
        assert!(!a.conflicts_with(&diagonal, 0.05));
    }
}
