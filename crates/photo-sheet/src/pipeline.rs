//! Photo sheet generation
//!
//! This module orchestrates the whole run:
//! 1. Rasterize every photo concurrently on blocking tasks
//! 2. Lay out the photos that rasterized successfully
//! 3. Render the placements into a PDF document

use crate::crop::{CropRect, centered_crop};
use crate::intake::load_photos;
use crate::io::save_pdf;
use crate::options::{JobOptions, RasterOptions};
use crate::raster::rasterize;
use crate::render::render_document;
use crate::types::*;
use log::{info, warn};
use lopdf::Document;
use photo_layout::{
    Item, ItemId, Layout, LayoutStatistics, PageSpec, PrintSize, calculate_statistics,
};
use std::collections::HashMap;
use std::path::Path;

/// A decoded photo with its print choices
#[derive(Debug, Clone)]
pub struct Photo {
    pub source: SourceImage,
    pub size: Option<PrintSize>,
    /// Explicit crop; a centered crop is used when absent
    pub crop: Option<CropRect>,
}

impl Photo {
    pub fn new(source: SourceImage, size: PrintSize) -> Self {
        Self {
            source,
            size: Some(size),
            crop: None,
        }
    }

    pub fn with_crop(mut self, crop: CropRect) -> Self {
        self.crop = Some(crop);
        self
    }

    /// The crop to use for `size`
    pub fn resolve_crop(&self, size: PrintSize) -> CropRect {
        self.crop.unwrap_or_else(|| {
            centered_crop(
                self.source.image.width(),
                self.source.image.height(),
                size.aspect_ratio(),
            )
        })
    }
}

/// Everything produced by one generation run
#[derive(Debug)]
pub struct GeneratedSheet {
    pub document: Document,
    pub layout: Layout,
    pub statistics: LayoutStatistics,
}

impl GeneratedSheet {
    /// Write the document to `path`
    pub async fn save(self, path: impl AsRef<Path>) -> Result<()> {
        save_pdf(self.document, path).await
    }
}

/// Rasterize, lay out and render a batch of photos
pub async fn generate(
    photos: Vec<Photo>,
    page: &PageSpec,
    raster: &RasterOptions,
) -> Result<GeneratedSheet> {
    // Fail fast before any pixel work
    page.validate()?;
    raster.validate()?;

    let names: HashMap<ItemId, String> = photos
        .iter()
        .map(|photo| (photo.source.id, photo.source.display_name()))
        .collect();

    let items = rasterize_all(photos, raster).await?;

    let layout = photo_layout::layout(&items, page)?;
    if !layout.skipped.is_empty() {
        let excluded: Vec<String> = layout
            .skipped
            .iter()
            .map(|skipped| {
                let name = names.get(&skipped.item_id).map_or("?", String::as_str);
                format!("{} {} ({:?})", skipped.item_id, name, skipped.reason)
            })
            .collect();
        warn!(
            "{} photo(s) left out of the document: {}",
            excluded.len(),
            excluded.join(", ")
        );
    }

    let statistics = calculate_statistics(&layout, page)?;
    info!(
        "Laid out {} of {} photo(s) on {} page(s)",
        statistics.placed_items, statistics.input_items, statistics.pages
    );

    // PDF assembly copies every JPEG payload, spawn blocking
    let page = *page;
    let (document, layout) = tokio::task::spawn_blocking(move || {
        let document = render_document(&layout, &items, &page)?;
        Ok::<_, PrintError>((document, layout))
    })
    .await??;

    Ok(GeneratedSheet {
        document,
        layout,
        statistics,
    })
}

/// Load the photos named in a job file and generate its document
pub async fn generate_from_job(job: &JobOptions) -> Result<GeneratedSheet> {
    job.validate()?;

    let paths: Vec<&Path> = job.photos.iter().map(|spec| spec.path.as_path()).collect();
    let sources = load_photos(&paths).await?;

    let photos = sources
        .into_iter()
        .zip(&job.photos)
        .map(|(source, spec)| Photo {
            source,
            size: spec.size,
            crop: spec.crop,
        })
        .collect();

    generate(photos, &job.page, &job.raster).await
}

/// Rasterize every photo on its own blocking task.
///
/// Results come back in input order. A photo without a size, or one whose
/// rasterization fails, becomes an item without content so the layout engine
/// skips it.
async fn rasterize_all(
    photos: Vec<Photo>,
    options: &RasterOptions,
) -> Result<Vec<Item<RasterImage>>> {
    let mut pending = Vec::with_capacity(photos.len());

    for photo in photos {
        let id = photo.source.id;
        let name = photo.source.display_name();
        let size = photo.size;
        let task = size.map(|size| {
            let crop = photo.resolve_crop(size);
            let image = photo.source.image;
            let options = *options;
            tokio::task::spawn_blocking(move || rasterize(&image, crop, size, &options))
        });
        pending.push((id, name, size, task));
    }

    let mut items = Vec::with_capacity(pending.len());
    for (id, name, size, task) in pending {
        let content = match task {
            Some(task) => match task.await {
                Ok(Ok(raster)) => Some(raster),
                Ok(Err(e)) => {
                    warn!("Failed to rasterize {} ({}): {}", id, name, e);
                    None
                }
                Err(e) => {
                    warn!("Rasterizing {} ({}) did not finish: {}", id, name, e);
                    None
                }
            },
            None => {
                warn!("{} ({}) has no print size", id, name);
                None
            }
        };
        items.push(Item::new(id, content, size));
    }

    Ok(items)
}
