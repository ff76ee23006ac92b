//! Composition element types.
//!
//! Compositions carry the property groups shared across page and row types:
//! visibility toggles, SEO fields, the main content block list, and article
//! metadata. They live in their own document-type folder and are referenced
//! by the page types and by the row settings element.

use tracing::info;
use uuid::Uuid;

use super::{ProvisionContext, camel_alias, names, property, property_aliased};
use crate::api::models::{
    ContainerModel, CreateDocumentTypeRequest, CreateFolderRequest, PropertyTypeModel,
};
use crate::core::Result;

pub(super) async fn create_element_folder(ctx: &ProvisionContext, name: &str) -> Result<Uuid> {
    let id = Uuid::new_v4();
    info!(name, "creating document type folder");
    ctx.client
        .post_document_type_folder(&CreateFolderRequest { id, name: name.to_string(), parent: None })
        .await?;
    Ok(id)
}

pub(super) async fn create_element(
    ctx: &ProvisionContext,
    folder: Uuid,
    name: &str,
    icon: &str,
    compositions: Vec<Uuid>,
    containers: Vec<ContainerModel>,
    properties: Vec<PropertyTypeModel>,
) -> Result<()> {
    info!(name, "creating element type");
    ctx.client
        .post_document_type(&CreateDocumentTypeRequest {
            id: Uuid::new_v4(),
            alias: camel_alias(name),
            name: name.to_string(),
            icon: icon.to_string(),
            is_element: true,
            parent: Some(folder.into()),
            compositions: compositions
                .into_iter()
                .map(crate::api::models::CompositionModel::composition)
                .collect(),
            containers,
            properties,
            allowed_document_types: vec![],
            allowed_templates: vec![],
            default_template: None,
        })
        .await
}

/// Create the composition folder and every composition element type.
pub async fn build(ctx: &ProvisionContext) -> Result<()> {
    let folder = create_element_folder(ctx, names::compositions::FOLDER).await?;

    let true_false = ctx.resolver.data_type_id(names::data_types::TRUE_FALSE).await?;
    let textstring = ctx.resolver.data_type_id(names::data_types::TEXTSTRING).await?;
    let textarea = ctx.resolver.data_type_id(names::data_types::TEXTAREA).await?;
    let date_picker = ctx.resolver.data_type_id(names::data_types::DATE_PICKER).await?;
    let main_content =
        ctx.resolver.data_type_id(names::data_types::BLOCK_LIST_MAIN_CONTENT).await?;
    let categories =
        ctx.resolver.data_type_id(names::data_types::CONTENT_PICKER_CATEGORIES).await?;

    let settings = ContainerModel::tab("Settings", 0);
    create_element(
        ctx,
        folder,
        names::compositions::HIDE_PROPERTY,
        "icon-eye-slash",
        vec![],
        vec![settings.clone()],
        vec![property("Hide", true_false, settings.id, 0)],
    )
    .await?;

    let content = ContainerModel::tab("Content", 0);
    create_element(
        ctx,
        folder,
        names::compositions::CONTENT_CONTROLS,
        "icon-document",
        vec![],
        vec![content.clone()],
        vec![property("Main Content", main_content, content.id, 0)],
    )
    .await?;

    let seo = ContainerModel::tab("SEO", 10);
    create_element(
        ctx,
        folder,
        names::compositions::SEO_CONTROLS,
        "icon-search",
        vec![],
        vec![seo.clone()],
        vec![
            property("Meta Description", textarea, seo.id, 0),
            property("Meta Keywords", textstring, seo.id, 1),
        ],
    )
    .await?;

    let visibility = ContainerModel::tab("Visibility", 20);
    create_element(
        ctx,
        folder,
        names::compositions::VISIBILITY_CONTROLS,
        "icon-eye",
        vec![],
        vec![visibility.clone()],
        vec![
            property_aliased(
                "Hide from navigation",
                "umbracoNaviHide",
                true_false,
                visibility.id,
                0,
            ),
            property("Hide from XML sitemap", true_false, visibility.id, 1),
        ],
    )
    .await?;

    let article = ContainerModel::tab("Article", 0);
    create_element(
        ctx,
        folder,
        names::compositions::ARTICLE_CONTROLS,
        "icon-calendar",
        vec![],
        vec![article.clone()],
        vec![
            property("Article Date", date_picker, article.id, 0),
            property("Author", textstring, article.id, 1),
            property("Categories", categories, article.id, 2),
        ],
    )
    .await?;

    Ok(())
}
