//! Loading photos from disk

use crate::constants::MAX_PHOTOS;
use crate::types::*;
use log::info;
use photo_layout::ItemId;
use std::path::Path;

/// Read and decode a single photo
pub async fn load_photo(id: ItemId, path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;

    // Decoding is CPU-bound, spawn blocking
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;

    info!(
        "Loaded {} ({}x{} px) as photo {}",
        path.display(),
        image.width(),
        image.height(),
        id
    );
    Ok(SourceImage { id, path, image })
}

/// Load a batch of photos, numbering them in the given order
pub async fn load_photos(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    if paths.is_empty() {
        return Err(PrintError::NoPhotos);
    }
    if paths.len() > MAX_PHOTOS {
        return Err(PrintError::TooManyPhotos {
            count: paths.len(),
            max: MAX_PHOTOS,
        });
    }

    let mut photos = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        photos.push(load_photo(ItemId(index as u64), path).await?);
    }
    Ok(photos)
}
