use crate::layout::Layout;
use crate::types::*;

/// Calculate statistics for a finished layout
pub fn calculate_statistics(layout: &Layout, page: &PageSpec) -> Result<LayoutStatistics> {
    page.validate()?;

    let (usable_w, usable_h) = page.usable_area();
    let usable_area = usable_w * usable_h;

    // Covered area per page
    let mut coverage_per_page = vec![0.0; layout.page_count];
    for placement in &layout.placements {
        if let Some(covered) = coverage_per_page.get_mut(placement.page_index) {
            *covered += placement.width * placement.height;
        }
    }
    for covered in &mut coverage_per_page {
        *covered /= usable_area;
    }

    let count_reason = |reason: SkipReason| {
        layout
            .skipped
            .iter()
            .filter(|skipped| skipped.reason == reason)
            .count()
    };

    Ok(LayoutStatistics {
        input_items: layout.placements.len() + layout.skipped.len(),
        placed_items: layout.placements.len(),
        ineligible_items: count_reason(SkipReason::Ineligible),
        unplaceable_items: count_reason(SkipReason::Unplaceable),
        pages: layout.page_count,
        coverage_per_page,
    })
}
