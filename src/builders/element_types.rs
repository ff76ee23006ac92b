//! Row element types.
//!
//! Each row the block-list editors offer is an element type in the "Rows"
//! folder. The shared "Row Settings" element carries the per-block settings
//! (visibility via the Hide Property composition, plus spacing) and is
//! attached to every row through the block configuration.

use uuid::Uuid;

use super::compositions::{create_element, create_element_folder};
use super::{ProvisionContext, names, property};
use crate::api::models::ContainerModel;
use crate::core::Result;

/// Create the rows folder, the shared settings element, and every content
/// row element type.
pub async fn build(ctx: &ProvisionContext) -> Result<()> {
    let folder = create_element_folder(ctx, names::element_types::FOLDER).await?;

    let textstring = ctx.resolver.data_type_id(names::data_types::TEXTSTRING).await?;
    let textarea = ctx.resolver.data_type_id(names::data_types::TEXTAREA).await?;
    let richtext = ctx.resolver.data_type_id(names::data_types::RICHTEXT_EDITOR).await?;
    let image_picker = ctx.resolver.data_type_id(names::data_types::IMAGE_MEDIA_PICKER).await?;
    let multi_image_picker =
        ctx.resolver.data_type_id(names::data_types::MULTIPLE_IMAGE_MEDIA_PICKER).await?;
    let content_picker = ctx.resolver.data_type_id(names::data_types::CONTENT_PICKER).await?;
    let numeric = ctx.resolver.data_type_id(names::data_types::NUMERIC).await?;
    let toggle_on = ctx.resolver.data_type_id(names::data_types::TOGGLE_DEFAULT_TRUE).await?;
    let svg_picker = ctx.resolver.data_type_id(names::data_types::MEDIA_PICKER_SVG).await?;
    let url_picker = ctx.resolver.data_type_id(names::data_types::URL_PICKER_SINGLE).await?;
    let spacing = ctx.resolver.data_type_id(names::data_types::DROPDOWN_SPACING).await?;

    let hide_property = ctx
        .resolver
        .document_type_id(&[names::compositions::FOLDER], names::compositions::HIDE_PROPERTY)
        .await?;

    let settings = ContainerModel::tab("Settings", 0);
    create_element(
        ctx,
        folder,
        names::element_types::ROW_SETTINGS,
        "icon-settings",
        vec![hide_property],
        vec![settings.clone()],
        vec![property("Spacing", spacing, settings.id, 0)],
    )
    .await?;

    let rows: &[(&str, &str, Vec<(&str, Uuid)>)] = &[
        (names::element_types::RICH_TEXT_ROW, "icon-edit", vec![("Content", richtext)]),
        (
            names::element_types::IMAGE_ROW,
            "icon-picture",
            vec![("Image", image_picker), ("Caption", textstring)],
        ),
        (
            names::element_types::VIDEO_ROW,
            "icon-video",
            vec![("Video Url", textstring), ("Caption", textstring)],
        ),
        (
            names::element_types::CODE_SNIPPET_ROW,
            "icon-code",
            vec![("Title", textstring), ("Code", textarea)],
        ),
        (
            names::element_types::IMAGE_CAROUSEL_ROW,
            "icon-pictures-alt-2",
            vec![("Images", multi_image_picker)],
        ),
        (
            names::element_types::LATEST_ARTICLES_ROW,
            "icon-newspaper",
            vec![
                ("Article List", content_picker),
                ("Page Size", numeric),
                ("Show Pagination", toggle_on),
            ],
        ),
        (
            names::element_types::ICON_LINK_ROW,
            "icon-link",
            vec![("Icon", svg_picker), ("Link", url_picker)],
        ),
    ];

    for (name, icon, fields) in rows {
        let content = ContainerModel::tab("Content", 0);
        let properties = fields
            .iter()
            .enumerate()
            .map(|(i, (field, data_type))| property(field, *data_type, content.id, i as i32))
            .collect();
        create_element(ctx, folder, name, icon, vec![], vec![content], properties).await?;
    }

    Ok(())
}
