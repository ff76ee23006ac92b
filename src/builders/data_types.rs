//! Data types and their editor configuration.
//!
//! Creation happens in three passes because the configuration references
//! resources from later phases:
//! 1. [`build`] creates every data type, with block lists empty and the
//!    category picker unfiltered.
//! 2. [`update_document_types`] runs after the element and document types
//!    exist and wires the block configurations and the category filter.
//! 3. [`update_documents`] runs after the content exists and roots the
//!    category picker's tree under the created site.

use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use super::{ProvisionContext, names};
use crate::api::models::{DataTypeRequest, PropertyValue};
use crate::core::Result;

/// One block entry in a block-list editor configuration.
#[derive(Debug, Clone)]
pub struct BlockConfiguration {
    pub content_element_type_key: Uuid,
    pub settings_element_type_key: Option<Uuid>,
}

impl From<BlockConfiguration> for Value {
    fn from(v: BlockConfiguration) -> Value {
        json!({
            "contentElementTypeKey": v.content_element_type_key,
            "settingsElementTypeKey": v.settings_element_type_key,
        })
    }
}

/// The `startNode` configuration of a tree picker.
#[derive(Debug, Clone)]
pub struct ContentPickerConfiguration {
    pub dynamic_root: Option<DynamicRoot>,
}

impl From<ContentPickerConfiguration> for Value {
    fn from(v: ContentPickerConfiguration) -> Value {
        json!({
            "type": "content",
            "dynamicRoot": v.dynamic_root.map(Value::from),
        })
    }
}

/// Dynamic start node anchored at a known document key.
#[derive(Debug, Clone)]
pub struct DynamicRoot {
    pub origin_key: Uuid,
    pub query_steps: Vec<DynamicRootStep>,
}

impl From<DynamicRoot> for Value {
    fn from(v: DynamicRoot) -> Value {
        json!({
            "originAlias": "ByKey",
            "originKey": v.origin_key,
            "querySteps": v.query_steps.into_iter().map(Value::from).collect::<Vec<_>>(),
        })
    }
}

/// One navigation step of a dynamic root query.
#[derive(Debug, Clone)]
pub struct DynamicRootStep {
    pub any_of_doc_type_keys: Vec<Uuid>,
}

impl DynamicRootStep {
    pub fn nearest_descendant_or_self(any_of_doc_type_keys: Vec<Uuid>) -> Self {
        Self { any_of_doc_type_keys }
    }
}

impl From<DynamicRootStep> for Value {
    fn from(v: DynamicRootStep) -> Value {
        json!({
            "alias": "NearestDescendantOrSelf",
            "anyOfDocTypeKeys": v.any_of_doc_type_keys,
        })
    }
}

fn block_list(name: &str, blocks: Vec<BlockConfiguration>) -> DataTypeRequest {
    let values = if blocks.is_empty() {
        vec![]
    } else {
        vec![PropertyValue::new(
            "blocks",
            Value::Array(blocks.into_iter().map(Value::from).collect()),
        )]
    };
    DataTypeRequest {
        name: name.to_string(),
        editor_alias: "Umbraco.BlockList".to_string(),
        editor_ui_alias: "Umb.PropertyEditorUi.BlockList".to_string(),
        values,
    }
}

fn spacing_dropdown() -> DataTypeRequest {
    DataTypeRequest {
        name: names::data_types::DROPDOWN_SPACING.to_string(),
        editor_alias: "Umbraco.DropDown.Flexible".to_string(),
        editor_ui_alias: "Umb.PropertyEditorUi.Dropdown".to_string(),
        values: vec![
            PropertyValue::new("items", json!(["None", "Small", "Medium", "Large"])),
            PropertyValue::new("multiple", false),
        ],
    }
}

fn toggle_default_true() -> DataTypeRequest {
    DataTypeRequest {
        name: names::data_types::TOGGLE_DEFAULT_TRUE.to_string(),
        editor_alias: "Umbraco.TrueFalse".to_string(),
        editor_ui_alias: "Umb.PropertyEditorUi.Toggle".to_string(),
        values: vec![PropertyValue::new("default", true)],
    }
}

fn single_url_picker() -> DataTypeRequest {
    DataTypeRequest {
        name: names::data_types::URL_PICKER_SINGLE.to_string(),
        editor_alias: "Umbraco.MultiUrlPicker".to_string(),
        editor_ui_alias: "Umb.PropertyEditorUi.MultiUrlPicker".to_string(),
        values: vec![PropertyValue::new("maxNumber", 1)],
    }
}

fn svg_media_picker(svg_media_type: Uuid) -> DataTypeRequest {
    DataTypeRequest {
        name: names::data_types::MEDIA_PICKER_SVG.to_string(),
        editor_alias: "Umbraco.MediaPicker3".to_string(),
        editor_ui_alias: "Umb.PropertyEditorUi.MediaPicker".to_string(),
        values: vec![
            PropertyValue::new("filter", svg_media_type.to_string()),
            PropertyValue::new("multiple", false),
        ],
    }
}

fn category_picker(
    filter: Option<Uuid>,
    start_node: Option<ContentPickerConfiguration>,
) -> DataTypeRequest {
    let mut values = vec![PropertyValue::new("maxNumber", 0)];
    if let Some(filter) = filter {
        values.push(PropertyValue::new("filter", filter.to_string()));
    }
    if let Some(start_node) = start_node {
        values.push(PropertyValue::new("startNode", start_node));
    }
    DataTypeRequest {
        name: names::data_types::CONTENT_PICKER_CATEGORIES.to_string(),
        editor_alias: "Umbraco.MultiNodeTreePicker".to_string(),
        editor_ui_alias: "Umb.PropertyEditorUi.ContentPicker".to_string(),
        values,
    }
}

/// First pass: create every data type the schema depends on.
pub async fn build(ctx: &ProvisionContext) -> Result<()> {
    let svg_media_type = ctx.resolver.media_type_id(names::media_types::SVG).await?;

    let requests = [
        spacing_dropdown(),
        toggle_default_true(),
        single_url_picker(),
        svg_media_picker(svg_media_type),
        category_picker(None, None),
        block_list(names::data_types::BLOCK_LIST_MAIN_CONTENT, vec![]),
        block_list(names::data_types::BLOCK_LIST_ICON_LIST, vec![]),
    ];
    for request in &requests {
        info!(name = %request.name, "creating data type");
        ctx.client.post_data_type(request).await?;
    }
    Ok(())
}

async fn row_block(ctx: &ProvisionContext, row: &str, settings: Uuid) -> Result<BlockConfiguration> {
    let content = ctx.resolver.document_type_id(&[names::element_types::FOLDER], row).await?;
    Ok(BlockConfiguration {
        content_element_type_key: content,
        settings_element_type_key: Some(settings),
    })
}

/// Second pass: wire block configurations and the category filter now that
/// the element and document types exist.
pub async fn update_document_types(ctx: &ProvisionContext) -> Result<()> {
    let settings = ctx
        .resolver
        .document_type_id(&[names::element_types::FOLDER], names::element_types::ROW_SETTINGS)
        .await?;

    let mut main_blocks = Vec::new();
    for row in names::element_types::CONTENT_ROWS {
        if *row != names::element_types::ICON_LINK_ROW {
            main_blocks.push(row_block(ctx, row, settings).await?);
        }
    }
    let id = ctx.resolver.data_type_id(names::data_types::BLOCK_LIST_MAIN_CONTENT).await?;
    info!(name = names::data_types::BLOCK_LIST_MAIN_CONTENT, "wiring block configuration");
    ctx.client
        .put_data_type(id, &block_list(names::data_types::BLOCK_LIST_MAIN_CONTENT, main_blocks))
        .await?;

    let icon_blocks =
        vec![row_block(ctx, names::element_types::ICON_LINK_ROW, settings).await?];
    let id = ctx.resolver.data_type_id(names::data_types::BLOCK_LIST_ICON_LIST).await?;
    info!(name = names::data_types::BLOCK_LIST_ICON_LIST, "wiring block configuration");
    ctx.client
        .put_data_type(id, &block_list(names::data_types::BLOCK_LIST_ICON_LIST, icon_blocks))
        .await?;

    let category = ctx
        .resolver
        .document_type_id(&[names::document_types::FOLDER], names::document_types::CATEGORY)
        .await?;
    let id = ctx.resolver.data_type_id(names::data_types::CONTENT_PICKER_CATEGORIES).await?;
    info!(name = names::data_types::CONTENT_PICKER_CATEGORIES, "setting category filter");
    ctx.client.put_data_type(id, &category_picker(Some(category), None)).await?;
    Ok(())
}

/// Third pass: root the category picker under the created site so editors
/// only see the category tree.
pub async fn update_documents(ctx: &ProvisionContext, home_key: Uuid) -> Result<()> {
    let category = ctx
        .resolver
        .document_type_id(&[names::document_types::FOLDER], names::document_types::CATEGORY)
        .await?;
    let category_list = ctx
        .resolver
        .document_type_id(&[names::document_types::FOLDER], names::document_types::CATEGORY_LIST)
        .await?;

    let start_node = ContentPickerConfiguration {
        dynamic_root: Some(DynamicRoot {
            origin_key: home_key,
            query_steps: vec![DynamicRootStep::nearest_descendant_or_self(vec![category_list])],
        }),
    };
    let id = ctx.resolver.data_type_id(names::data_types::CONTENT_PICKER_CATEGORIES).await?;
    info!(name = names::data_types::CONTENT_PICKER_CATEGORIES, "setting picker start node");
    ctx.client.put_data_type(id, &category_picker(Some(category), Some(start_node))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_configuration_wire_shape() {
        let content = Uuid::new_v4();
        let settings = Uuid::new_v4();
        let value: Value = BlockConfiguration {
            content_element_type_key: content,
            settings_element_type_key: Some(settings),
        }
        .into();
        assert_eq!(value["contentElementTypeKey"], json!(content));
        assert_eq!(value["settingsElementTypeKey"], json!(settings));
    }

    #[test]
    fn test_dynamic_root_wire_shape() {
        let origin = Uuid::new_v4();
        let doc_type = Uuid::new_v4();
        let value: Value = DynamicRoot {
            origin_key: origin,
            query_steps: vec![DynamicRootStep::nearest_descendant_or_self(vec![doc_type])],
        }
        .into();
        assert_eq!(value["originAlias"], "ByKey");
        assert_eq!(value["originKey"], json!(origin));
        assert_eq!(value["querySteps"][0]["alias"], "NearestDescendantOrSelf");
        assert_eq!(value["querySteps"][0]["anyOfDocTypeKeys"][0], json!(doc_type));
    }

    #[test]
    fn test_empty_block_list_omits_blocks_value() {
        let request = block_list("Empty", vec![]);
        assert!(request.values.is_empty());
    }

    #[test]
    fn test_category_picker_grows_across_passes() {
        let initial = category_picker(None, None);
        assert_eq!(initial.values.len(), 1);

        let filtered = category_picker(Some(Uuid::new_v4()), None);
        assert_eq!(filtered.values.len(), 2);

        let rooted = category_picker(
            Some(Uuid::new_v4()),
            Some(ContentPickerConfiguration { dynamic_root: None }),
        );
        assert_eq!(rooted.values.len(), 3);
        assert_eq!(rooted.values[2].alias, "startNode");
    }
}
