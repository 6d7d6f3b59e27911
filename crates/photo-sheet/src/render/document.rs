//! Whole-document assembly

use crate::constants::PDF_VERSION;
use crate::types::{RasterImage, Result};
use lopdf::{Dictionary, Document, Object};
use log::info;
use photo_layout::{Item, Layout, PageSpec, Placement};

use super::page::render_page;

/// Build a PDF with one page per layout page.
///
/// Pages are emitted for indices `0..layout.page_count`. An empty layout still
/// yields a single blank page so the output is always a valid document.
pub fn render_document(
    layout: &Layout,
    items: &[Item<RasterImage>],
    page: &PageSpec,
) -> Result<Document> {
    let mut output = Document::with_version(PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    let page_count = layout.page_count.max(1);
    for page_index in 0..page_count {
        let placements: Vec<&Placement> = layout.placements_on_page(page_index).collect();
        let page_id = render_page(&mut output, &placements, items, page, pages_tree_id)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    info!(
        "Rendered {} photo(s) onto {} page(s)",
        layout.placements.len(),
        count
    );
    Ok(output)
}
