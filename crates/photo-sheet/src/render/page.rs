//! Output page rendering

use crate::types::{PrintError, RasterImage, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use photo_layout::constants::in_to_pt;
use photo_layout::{Item, PageSpec, Placement};

use super::xobject::create_image_xobject;

/// Render one output page holding `placements`.
///
/// Each placement's image is looked up through its `item_index` and drawn
/// scaled exactly to the placement's width and height.
pub fn render_page(
    output: &mut Document,
    placements: &[&Placement],
    items: &[Item<RasterImage>],
    page: &PageSpec,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(in_to_pt(page.width_in) as f32),
            Object::Real(in_to_pt(page.height_in) as f32),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for (idx, placement) in placements.iter().enumerate() {
        let raster = items
            .get(placement.item_index)
            .and_then(|item| item.content.as_ref())
            .ok_or(PrintError::MissingImage(placement.item_id))?;

        let xobject_name = format!("Im{}", idx);
        let xobject_id = create_image_xobject(output, raster);
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(placement_command(&xobject_name, placement, page));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Content stream command drawing an image XObject over a placement.
///
/// Placements use a top-left origin in inches; PDF user space is bottom-left
/// in points, so the y axis is flipped against the page height.
pub fn placement_command(xobject_name: &str, placement: &Placement, page: &PageSpec) -> String {
    let width = in_to_pt(placement.width);
    let height = in_to_pt(placement.height);
    let x = in_to_pt(placement.x);
    let y = in_to_pt(page.height_in - placement.y - placement.height);

    format!(
        "q {:.3} 0 0 {:.3} {:.3} {:.3} cm /{} Do Q\n",
        width, height, x, y, xobject_name
    )
}
