//! Media folders and files.
//!
//! Files reach the server in two steps: the bytes are uploaded as a
//! temporary file under a caller-chosen id, then the media item is created
//! with an `umbracoFile` value referencing that id. Folder ids are generated
//! locally so items can be parented without an intermediate lookup.

use tracing::info;
use uuid::Uuid;

use super::{ProvisionContext, names};
use crate::api::models::{CreateMediaRequest, PropertyValue, TemporaryFileValue, VariantModel};
use crate::core::Result;

const SOCIAL_ICONS: &[&str] =
    &[names::media::GITHUB, names::media::DISCORD, names::media::BLUESKY, names::media::YOUTUBE];

const SAMPLE_IMAGES: &[&str] =
    &[names::media::CODING, names::media::LAPTOP, names::media::NOTEBOOK];

fn file_name(item: &str) -> String {
    format!("{}.svg", item.to_lowercase().replace(' ', "-"))
}

/// Relative paths of every media file the build expects under the asset
/// directory.
pub fn asset_files() -> Vec<String> {
    SOCIAL_ICONS
        .iter()
        .map(|name| format!("media/social-icons/{}", file_name(name)))
        .chain(SAMPLE_IMAGES.iter().map(|name| format!("media/sample-images/{}", file_name(name))))
        .collect()
}

async fn create_folder(ctx: &ProvisionContext, name: &str) -> Result<Uuid> {
    let folder_type = ctx.resolver.media_type_id(names::media_types::FOLDER).await?;
    let id = Uuid::new_v4();
    info!(name, "creating media folder");
    ctx.client
        .post_media(&CreateMediaRequest {
            id,
            parent: None,
            media_type: folder_type.into(),
            variants: vec![VariantModel::named(name)],
            values: vec![],
        })
        .await?;
    Ok(id)
}

async fn upload_file(
    ctx: &ProvisionContext,
    parent: Uuid,
    name: &str,
    asset_dir: &str,
) -> Result<()> {
    let file = file_name(name);
    let bytes = ctx.assets.read_bytes(&format!("media/{asset_dir}/{file}"))?;
    let media_type = ctx.resolver.media_type_id(names::media_types::SVG).await?;

    let temporary_file_id = Uuid::new_v4();
    ctx.client.post_temporary_file(temporary_file_id, &file, bytes).await?;

    info!(name, file = %file, "creating media item");
    ctx.client
        .post_media(&CreateMediaRequest {
            id: Uuid::new_v4(),
            parent: Some(parent.into()),
            media_type: media_type.into(),
            variants: vec![VariantModel::named(name)],
            values: vec![PropertyValue::new(
                "umbracoFile",
                TemporaryFileValue { temporary_file_id },
            )],
        })
        .await
}

/// Create the media folders and upload every file into them.
pub async fn build(ctx: &ProvisionContext) -> Result<()> {
    let icons = create_folder(ctx, names::media::SOCIAL_ICONS_FOLDER).await?;
    for name in SOCIAL_ICONS {
        upload_file(ctx, icons, name, "social-icons").await?;
    }

    let images = create_folder(ctx, names::media::SAMPLE_IMAGES_FOLDER).await?;
    for name in SAMPLE_IMAGES {
        upload_file(ctx, images, name, "sample-images").await?;
    }
    Ok(())
}
