//! Document output

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Serialize a document into PDF bytes
pub fn document_bytes(doc: &mut Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

/// Save the generated document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || document_bytes(&mut doc)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
