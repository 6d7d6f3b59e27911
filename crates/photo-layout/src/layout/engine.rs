//! Ordering and page overflow
//!
//! The engine sorts eligible photos by area, asks its strategy for a position
//! on the current page, and starts a fresh page when the strategy gives up.

use crate::constants::GRID_TOLERANCE_IN;
use crate::types::{
    Item, ItemId, PageSpec, Placement, Position, PrintSize, Result, SkipReason, SkippedItem,
};
use log::{debug, warn};

use super::{FirstFitGrid, PlacementStrategy, Rect};

/// The page currently being filled.
///
/// Passed into and returned from each placement step so no state is shared
/// between calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageCursor {
    pub page_index: usize,
    pub used: Vec<Rect>,
}

/// Result of laying out one batch of photos
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Placements in the order they were produced
    pub placements: Vec<Placement>,
    /// Items present in the input but absent from `placements`
    pub skipped: Vec<SkippedItem>,
    /// Number of pages touched, contiguous from 0
    pub page_count: usize,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements that landed on `page_index`
    pub fn placements_on_page(&self, page_index: usize) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |placement| placement.page_index == page_index)
    }

    /// Ids of every item that was not placed
    pub fn excluded_ids(&self) -> Vec<ItemId> {
        self.skipped.iter().map(|skipped| skipped.item_id).collect()
    }

    /// Ids of items too large for the page
    pub fn unplaceable_ids(&self) -> Vec<ItemId> {
        self.skipped
            .iter()
            .filter(|skipped| skipped.reason == SkipReason::Unplaceable)
            .map(|skipped| skipped.item_id)
            .collect()
    }

    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::types::LayoutError::Serialize(e.to_string()))
    }
}

/// Lays out photos with a given position strategy
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine<S = FirstFitGrid> {
    strategy: S,
}

impl LayoutEngine<FirstFitGrid> {
    pub fn new() -> Self {
        Self {
            strategy: FirstFitGrid,
        }
    }
}

impl<S: PlacementStrategy> LayoutEngine<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// Assign every eligible item a page and a position.
    ///
    /// The page spec is validated before any item is looked at. Items without
    /// content or size, and items larger than the usable area, end up in
    /// `Layout::skipped` instead of failing the whole batch.
    pub fn layout<C>(&self, items: &[Item<C>], page: &PageSpec) -> Result<Layout> {
        page.validate()?;

        let mut layout = Layout::default();
        let mut queue: Vec<(usize, ItemId, PrintSize)> = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match item.size {
                Some(size) if item.content.is_some() => queue.push((index, item.id, size)),
                _ => {
                    debug!("Skipping {}: no rasterized image or print size", item.id);
                    layout.skipped.push(SkippedItem {
                        item_id: item.id,
                        item_index: index,
                        reason: SkipReason::Ineligible,
                    });
                }
            }
        }

        // Stable: equal areas keep their input order
        queue.sort_by(|a, b| b.2.area_in2().total_cmp(&a.2.area_in2()));

        let mut cursor = PageCursor::default();
        for (index, id, size) in queue {
            let (next, position) = self.place_item(cursor, size, page);
            cursor = next;

            match position {
                Some(position) => {
                    let (width, height) = size.dimensions_in();
                    debug!(
                        "Placed {} ({}) on page {} at ({:.2}, {:.2})",
                        id, size, cursor.page_index, position.x, position.y
                    );
                    layout.placements.push(Placement {
                        page_index: cursor.page_index,
                        x: position.x,
                        y: position.y,
                        width,
                        height,
                        item_id: id,
                        item_index: index,
                    });
                }
                None => {
                    let (usable_w, usable_h) = page.usable_area();
                    warn!(
                        "{} ({}) does not fit the usable page area {:.2}x{:.2} in; excluded",
                        id, size, usable_w, usable_h
                    );
                    layout.skipped.push(SkippedItem {
                        item_id: id,
                        item_index: index,
                        reason: SkipReason::Unplaceable,
                    });
                }
            }
        }

        layout.page_count = layout
            .placements
            .last()
            .map_or(0, |placement| placement.page_index + 1);

        Ok(layout)
    }

    /// Place one photo, starting a new page if the current one is full.
    ///
    /// Returns the cursor for the next photo and the accepted position, or
    /// `None` when the photo cannot fit even on an empty page. A rejected photo
    /// leaves the cursor untouched.
    pub fn place_item(
        &self,
        mut cursor: PageCursor,
        size: PrintSize,
        page: &PageSpec,
    ) -> (PageCursor, Option<Position>) {
        if let Some(position) = self.strategy.find_position(size, &cursor.used, page) {
            cursor.used.push(Rect::at(position, size));
            return (cursor, Some(position));
        }

        if !fits_usable_area(size, page) {
            return (cursor, None);
        }

        // A page nothing landed on yet is reused rather than left blank
        if !cursor.used.is_empty() {
            debug!(
                "Page {} is full for a {} photo, starting page {}",
                cursor.page_index,
                size,
                cursor.page_index + 1
            );
            cursor.page_index += 1;
            cursor.used.clear();
        }

        // Fresh pages anchor at the top, centered, without a second search
        let position = Position {
            x: (page.width_in - size.width_in()) / 2.0,
            y: page.margin_in,
        };
        cursor.used.push(Rect::at(position, size));
        (cursor, Some(position))
    }
}

/// Lay out `items` on `page` with the first-fit grid strategy
pub fn layout<C>(items: &[Item<C>], page: &PageSpec) -> Result<Layout> {
    LayoutEngine::new().layout(items, page)
}

/// Whether a photo fits inside the margins of an empty page
pub fn fits_usable_area(size: PrintSize, page: &PageSpec) -> bool {
    let (usable_w, usable_h) = page.usable_area();
    let (width, height) = size.dimensions_in();
    width <= usable_w + GRID_TOLERANCE_IN && height <= usable_h + GRID_TOLERANCE_IN
}
