//! Block-list editor payloads.
//!
//! The block-list editor stores its value as four parallel collections:
//! a `layout` map keyed by the editor alias listing each block's content key
//! (and settings key, when present), `contentData` and `settingsData` arrays
//! holding the block items themselves, and an `expose` array marking every
//! block visible in all cultures. [`BlockListValue`] keeps the four
//! collections consistent: the only way to grow them is [`BlockListValue::add`],
//! which appends to all of them atomically with freshly generated keys.
//!
//! [`rows`] layers the concrete row shapes of the starter content on top of
//! `add`; [`values`] holds the picker value types the rows are built from.

pub mod rows;
pub mod values;

use serde::{Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use crate::api::models::PropertyValue;
use crate::core::Result;

/// Property editor alias the layout map is keyed by.
pub const BLOCK_LIST_EDITOR_ALIAS: &str = "Umbraco.BlockList";

/// Layout entry tying a block's content item to its optional settings item.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockLayoutEntry {
    pub content_key: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_key: Option<Uuid>,
}

/// A content or settings item inside a block list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockItem {
    pub content_type_key: Uuid,
    pub key: Uuid,
    pub values: Vec<PropertyValue>,
}

/// Marks a block's content as exposed to the current culture.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockExposeEntry {
    pub content_key: Uuid,
}

/// The complete value of a block-list property.
///
/// Blocks appear in insertion order in every collection; the editor renders
/// them in `layout` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockListValue {
    layout: Vec<BlockLayoutEntry>,
    content_data: Vec<BlockItem>,
    settings_data: Vec<BlockItem>,
    expose: Vec<BlockExposeEntry>,
}

impl BlockListValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one block.
    ///
    /// Generates a fresh content key (and settings key, when settings are
    /// given) and appends to layout, content data, settings data, and expose
    /// in one step, so the collections can never disagree. Returns the new
    /// block's content key.
    pub fn add(
        &mut self,
        content_type_key: Uuid,
        content_values: Vec<PropertyValue>,
        settings: Option<(Uuid, Vec<PropertyValue>)>,
    ) -> Uuid {
        let content_key = Uuid::new_v4();
        let mut entry = BlockLayoutEntry { content_key, settings_key: None };

        if let Some((settings_type_key, values)) = settings {
            let settings_key = Uuid::new_v4();
            entry.settings_key = Some(settings_key);
            self.settings_data.push(BlockItem {
                content_type_key: settings_type_key,
                key: settings_key,
                values,
            });
        }

        self.layout.push(entry);
        self.content_data.push(BlockItem { content_type_key, key: content_key, values: content_values });
        self.expose.push(BlockExposeEntry { content_key });
        content_key
    }

    /// Number of blocks in the list.
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Serialize into a property value suitable for a document request.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockListWire<'a> {
    layout: LayoutWire<'a>,
    content_data: &'a [BlockItem],
    settings_data: &'a [BlockItem],
    expose: &'a [BlockExposeEntry],
}

#[derive(Serialize)]
struct LayoutWire<'a> {
    #[serde(rename = "Umbraco.BlockList")]
    entries: &'a [BlockLayoutEntry],
}

impl Serialize for BlockListValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        BlockListWire {
            layout: LayoutWire { entries: &self.layout },
            content_data: &self.content_data,
            settings_data: &self.settings_data,
            expose: &self.expose,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_without_settings_grows_three_collections() {
        let mut list = BlockListValue::new();
        let content_type = Uuid::new_v4();
        let key = list.add(content_type, vec![PropertyValue::new("title", "hello")], None);

        let value = list.to_value().unwrap();
        assert_eq!(value["layout"][BLOCK_LIST_EDITOR_ALIAS][0]["contentKey"], json!(key));
        assert!(value["layout"][BLOCK_LIST_EDITOR_ALIAS][0].get("settingsKey").is_none());
        assert_eq!(value["contentData"][0]["contentTypeKey"], json!(content_type));
        assert_eq!(value["contentData"][0]["key"], json!(key));
        assert_eq!(value["settingsData"].as_array().unwrap().len(), 0);
        assert_eq!(value["expose"][0]["contentKey"], json!(key));
    }

    #[test]
    fn test_add_with_settings_links_layout_to_settings_item() {
        let mut list = BlockListValue::new();
        let settings_type = Uuid::new_v4();
        list.add(
            Uuid::new_v4(),
            vec![],
            Some((settings_type, vec![PropertyValue::new("hide", false)])),
        );

        let value = list.to_value().unwrap();
        let settings_key = &value["layout"][BLOCK_LIST_EDITOR_ALIAS][0]["settingsKey"];
        assert!(!settings_key.is_null());
        assert_eq!(&value["settingsData"][0]["key"], settings_key);
        assert_eq!(value["settingsData"][0]["contentTypeKey"], json!(settings_type));
        assert_eq!(value["settingsData"][0]["values"][0]["alias"], "hide");
    }

    #[test]
    fn test_blocks_keep_insertion_order() {
        let mut list = BlockListValue::new();
        let first = list.add(Uuid::new_v4(), vec![], None);
        let second = list.add(Uuid::new_v4(), vec![], None);
        let third = list.add(Uuid::new_v4(), vec![], None);
        assert_eq!(list.len(), 3);

        let value = list.to_value().unwrap();
        let layout = value["layout"][BLOCK_LIST_EDITOR_ALIAS].as_array().unwrap();
        let ordered: Vec<_> = layout.iter().map(|e| e["contentKey"].clone()).collect();
        assert_eq!(ordered, vec![json!(first), json!(second), json!(third)]);
        let exposed: Vec<_> =
            value["expose"].as_array().unwrap().iter().map(|e| e["contentKey"].clone()).collect();
        assert_eq!(ordered, exposed);
    }

    #[test]
    fn test_mixed_rows_share_no_settings() {
        let mut list = BlockListValue::new();
        list.add(Uuid::new_v4(), vec![PropertyValue::new("title", "X")], None);
        list.add(
            Uuid::new_v4(),
            vec![PropertyValue::new("title", "Y")],
            Some((Uuid::new_v4(), vec![PropertyValue::new("hide", false)])),
        );

        let value = list.to_value().unwrap();
        assert_eq!(value["contentData"].as_array().unwrap().len(), 2);
        assert_eq!(value["settingsData"].as_array().unwrap().len(), 1);
        assert_eq!(value["expose"].as_array().unwrap().len(), 2);
        let layout = value["layout"][BLOCK_LIST_EDITOR_ALIAS].as_array().unwrap();
        assert_eq!(layout.len(), 2);
        assert!(layout[0].get("settingsKey").is_none());
        assert_eq!(layout[1]["settingsKey"], value["settingsData"][0]["key"]);
    }

    #[test]
    fn test_generated_keys_are_distinct() {
        let mut list = BlockListValue::new();
        let settings_type = Uuid::new_v4();
        let a = list.add(Uuid::new_v4(), vec![], Some((settings_type, vec![])));
        let b = list.add(Uuid::new_v4(), vec![], Some((settings_type, vec![])));
        assert_ne!(a, b);
        assert_ne!(list.layout[0].settings_key, list.layout[1].settings_key);
        assert_ne!(Some(a), list.layout[0].settings_key);
    }
}
