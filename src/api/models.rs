//! Wire models for the management API.
//!
//! The field names here are dictated by the remote API contract (camelCase
//! JSON) and must be treated as a fixed wire format when interoperating with
//! an existing deployment.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Response from the back-office token endpoint (client-credentials grant).
///
/// OAuth token responses use snake_case field names, unlike the rest of the
/// management API.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    /// The bearer token to send on subsequent requests.
    pub access_token: String,
    /// Declared lifetime of the token, in seconds.
    pub expires_in: u64,
}

/// One page of a paginated listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// A node in one of the remote tree structures (data types, document types,
/// templates).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeItem {
    pub id: Uuid,
    pub name: String,
    /// Containers (folders) can hold further tree items but are not
    /// themselves resolvable resources.
    #[serde(default)]
    pub is_folder: bool,
}

/// A node in the media tree. Media names live on culture variants rather
/// than directly on the item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTreeItem {
    pub id: Uuid,
    #[serde(default)]
    pub variants: Vec<VariantModel>,
}

/// Name-carrying variant, used by media listings and by document/media
/// create requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantModel {
    pub name: String,
}

impl VariantModel {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A `{ "id": ... }` reference to another resource, used wherever the API
/// links items by identifier (parents, data types, templates, containers).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReferenceById {
    pub id: Uuid,
}

impl From<Uuid> for ReferenceById {
    fn from(id: Uuid) -> Self {
        Self { id }
    }
}

/// An `{ "alias": ..., "value": ... }` pair. The same shape carries data-type
/// configuration values, document property values, and block row values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyValue {
    pub alias: String,
    pub value: Value,
}

impl PropertyValue {
    pub fn new(alias: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { alias: alias.into(), value: value.into() }
    }
}

/// Request body for creating a dictionary item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDictionaryItemRequest {
    pub name: String,
    pub translations: Vec<DictionaryTranslation>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryTranslation {
    pub iso_code: String,
    pub translation: String,
}

/// Request body for creating a template. The API derives the template
/// hierarchy from the view content itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub name: String,
    pub alias: String,
    pub content: String,
}

/// Request body for creating or updating a data type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeRequest {
    pub name: String,
    pub editor_alias: String,
    pub editor_ui_alias: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<PropertyValue>,
}

/// Request body for creating a document-type folder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ReferenceById>,
}

/// Request body for creating a document type (or element type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentTypeRequest {
    pub id: Uuid,
    pub alias: String,
    pub name: String,
    pub icon: String,
    pub is_element: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ReferenceById>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compositions: Vec<CompositionModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<ContainerModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyTypeModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_document_types: Vec<ReferenceById>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_templates: Vec<ReferenceById>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<ReferenceById>,
}

/// Composition reference on a document type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionModel {
    pub document_type: ReferenceById,
    pub composition_type: &'static str,
}

impl CompositionModel {
    pub fn composition(document_type_id: Uuid) -> Self {
        Self { document_type: document_type_id.into(), composition_type: "Composition" }
    }
}

/// Tab or group container on a document type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerModel {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub sort_order: i32,
}

impl ContainerModel {
    /// A tab container with a fresh id.
    pub fn tab(name: impl Into<String>, sort_order: i32) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), kind: "Tab", sort_order }
    }
}

/// Property definition on a document type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTypeModel {
    pub name: String,
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sort_order: i32,
    pub data_type: ReferenceById,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ReferenceById>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<PropertyValidationModel>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValidationModel {
    pub mandatory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory_message: Option<String>,
}

/// Request body for creating a document.
///
/// This single struct with optional fields replaces a family of overlapping
/// convenience signatures; callers fill in only what the document needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ReferenceById>,
    pub document_type: ReferenceById,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<ReferenceById>,
    pub variants: Vec<VariantModel>,
    pub values: Vec<PropertyValue>,
}

/// Request body for updating an existing document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<ReferenceById>,
    pub variants: Vec<VariantModel>,
    pub values: Vec<PropertyValue>,
}

/// Request body for publishing a document together with its descendants.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishWithDescendantsRequest {
    pub include_unpublished_descendants: bool,
}

/// Request body for creating a media item (folder or file).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaRequest {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ReferenceById>,
    pub media_type: ReferenceById,
    pub variants: Vec<VariantModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<PropertyValue>,
}

/// Property value linking an uploaded temporary file to a media item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryFileValue {
    pub temporary_file_id: Uuid,
}

impl From<TemporaryFileValue> for Value {
    fn from(v: TemporaryFileValue) -> Value {
        serde_json::json!({ "temporaryFileId": v.temporary_file_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_item_deserializes_without_folder_flag() {
        let item: TreeItem = serde_json::from_str(
            r#"{"id":"9b41fca8-b355-4b94-bd16-a32f1a572fd2","name":"Textstring"}"#,
        )
        .unwrap();
        assert_eq!(item.name, "Textstring");
        assert!(!item.is_folder);
    }

    #[test]
    fn test_document_request_omits_empty_optionals() {
        let req = CreateDocumentRequest {
            id: Uuid::new_v4(),
            parent: None,
            document_type: Uuid::new_v4().into(),
            template: None,
            variants: vec![VariantModel::named("Home")],
            values: vec![],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("parent").is_none());
        assert!(json.get("template").is_none());
        assert_eq!(json["variants"][0]["name"], "Home");
    }

    #[test]
    fn test_container_serializes_type_field() {
        let json = serde_json::to_value(ContainerModel::tab("Content", 0)).unwrap();
        assert_eq!(json["type"], "Tab");
        assert_eq!(json["sortOrder"], 0);
    }
}
