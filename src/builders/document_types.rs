//! Page document types.
//!
//! The page types live in the "Pages" folder and are assembled almost
//! entirely from compositions; only Home and Category carry extra properties
//! of their own. Identifiers are generated locally so the allowed-children
//! graph can be wired without intermediate lookups.

use tracing::info;
use uuid::Uuid;

use super::{ProvisionContext, camel_alias, names, property};
use crate::api::models::{
    CompositionModel, ContainerModel, CreateDocumentTypeRequest, CreateFolderRequest,
    PropertyTypeModel, ReferenceById,
};
use crate::core::Result;

struct PageIds {
    home: Uuid,
    article_list: Uuid,
    article: Uuid,
    category_list: Uuid,
    category: Uuid,
    error: Uuid,
}

impl PageIds {
    fn generate() -> Self {
        Self {
            home: Uuid::new_v4(),
            article_list: Uuid::new_v4(),
            article: Uuid::new_v4(),
            category_list: Uuid::new_v4(),
            category: Uuid::new_v4(),
            error: Uuid::new_v4(),
        }
    }
}

struct PageSpec {
    id: Uuid,
    name: &'static str,
    icon: &'static str,
    compositions: Vec<Uuid>,
    containers: Vec<ContainerModel>,
    properties: Vec<PropertyTypeModel>,
    allowed_children: Vec<Uuid>,
    template: &'static str,
}

async fn create_page(ctx: &ProvisionContext, folder: Uuid, spec: PageSpec) -> Result<()> {
    let template = ctx.resolver.template_id(spec.template).await?;
    info!(name = spec.name, "creating document type");
    ctx.client
        .post_document_type(&CreateDocumentTypeRequest {
            id: spec.id,
            alias: camel_alias(spec.name),
            name: spec.name.to_string(),
            icon: spec.icon.to_string(),
            is_element: false,
            parent: Some(folder.into()),
            compositions: spec
                .compositions
                .into_iter()
                .map(CompositionModel::composition)
                .collect(),
            containers: spec.containers,
            properties: spec.properties,
            allowed_document_types: spec
                .allowed_children
                .into_iter()
                .map(ReferenceById::from)
                .collect(),
            allowed_templates: vec![template.into()],
            default_template: Some(template.into()),
        })
        .await
}

/// Create the pages folder and every page document type.
pub async fn build(ctx: &ProvisionContext) -> Result<()> {
    let folder_id = Uuid::new_v4();
    info!(name = names::document_types::FOLDER, "creating document type folder");
    ctx.client
        .post_document_type_folder(&CreateFolderRequest {
            id: folder_id,
            name: names::document_types::FOLDER.to_string(),
            parent: None,
        })
        .await?;

    let content_controls = ctx
        .resolver
        .document_type_id(&[names::compositions::FOLDER], names::compositions::CONTENT_CONTROLS)
        .await?;
    let seo_controls = ctx
        .resolver
        .document_type_id(&[names::compositions::FOLDER], names::compositions::SEO_CONTROLS)
        .await?;
    let visibility_controls = ctx
        .resolver
        .document_type_id(&[names::compositions::FOLDER], names::compositions::VISIBILITY_CONTROLS)
        .await?;
    let article_controls = ctx
        .resolver
        .document_type_id(&[names::compositions::FOLDER], names::compositions::ARTICLE_CONTROLS)
        .await?;

    let textstring = ctx.resolver.data_type_id(names::data_types::TEXTSTRING).await?;
    let textarea = ctx.resolver.data_type_id(names::data_types::TEXTAREA).await?;
    let icon_list = ctx.resolver.data_type_id(names::data_types::BLOCK_LIST_ICON_LIST).await?;

    let ids = PageIds::generate();

    let home_content = ContainerModel::tab("Content", 0);
    let home_footer = ContainerModel::tab("Footer", 5);
    let category_content = ContainerModel::tab("Content", 0);

    let pages = vec![
        PageSpec {
            id: ids.article,
            name: names::document_types::ARTICLE,
            icon: "icon-article",
            compositions: vec![content_controls, seo_controls, visibility_controls, article_controls],
            containers: vec![],
            properties: vec![],
            allowed_children: vec![],
            template: names::templates::ARTICLE,
        },
        PageSpec {
            id: ids.article_list,
            name: names::document_types::ARTICLE_LIST,
            icon: "icon-thumbnail-list",
            compositions: vec![content_controls, seo_controls, visibility_controls],
            containers: vec![],
            properties: vec![],
            allowed_children: vec![ids.article],
            template: names::templates::ARTICLE_LIST,
        },
        PageSpec {
            id: ids.category,
            name: names::document_types::CATEGORY,
            icon: "icon-tag",
            compositions: vec![seo_controls, visibility_controls],
            containers: vec![category_content.clone()],
            properties: vec![property(
                "Category Description",
                textarea,
                category_content.id,
                0,
            )],
            allowed_children: vec![],
            template: names::templates::CATEGORY,
        },
        PageSpec {
            id: ids.category_list,
            name: names::document_types::CATEGORY_LIST,
            icon: "icon-tags",
            compositions: vec![seo_controls, visibility_controls],
            containers: vec![],
            properties: vec![],
            allowed_children: vec![ids.category],
            template: names::templates::CATEGORY_LIST,
        },
        PageSpec {
            id: ids.error,
            name: names::document_types::ERROR,
            icon: "icon-application-error",
            compositions: vec![content_controls, visibility_controls],
            containers: vec![],
            properties: vec![],
            allowed_children: vec![],
            template: names::templates::ERROR,
        },
        PageSpec {
            id: ids.home,
            name: names::document_types::HOME,
            icon: "icon-home",
            compositions: vec![content_controls, seo_controls, visibility_controls],
            containers: vec![home_content.clone(), home_footer.clone()],
            properties: vec![
                property("Site Name", textstring, home_content.id, 0),
                property("Social Icon Links", icon_list, home_footer.id, 0),
            ],
            allowed_children: vec![ids.article_list, ids.category_list, ids.error],
            template: names::templates::HOME,
        },
    ];

    for page in pages {
        create_page(ctx, folder_id, page).await?;
    }
    Ok(())
}
