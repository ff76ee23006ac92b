//! Typed property values for the rich editors.
//!
//! These mirror the JSON shapes the back office writes for its pickers.
//! Each converts into a [`serde_json::Value`] so it can be passed straight
//! to [`PropertyValue::new`](crate::api::models::PropertyValue::new).

use serde_json::{Value, json};
use uuid::Uuid;

/// Value for a rich-text property. Nested blocks are not provisioned, so
/// the `blocks` member is always null.
#[derive(Debug, Clone)]
pub struct RichTextValue {
    pub markup: String,
}

impl RichTextValue {
    pub fn new(markup: impl Into<String>) -> Self {
        Self { markup: markup.into() }
    }
}

impl From<RichTextValue> for Value {
    fn from(v: RichTextValue) -> Value {
        json!({ "markup": v.markup, "blocks": null })
    }
}

/// One selected item in a media picker. The editor stores a list of these;
/// [`MediaPickerValue::single`] produces the common one-item case.
#[derive(Debug, Clone)]
pub struct MediaPickerValue {
    pub key: Uuid,
    pub media_key: Uuid,
}

impl MediaPickerValue {
    /// Reference a media item; the entry itself gets a fresh key.
    pub fn new(media_key: Uuid) -> Self {
        Self { key: Uuid::new_v4(), media_key }
    }

    /// A picker value selecting exactly one media item.
    pub fn single(media_key: Uuid) -> Value {
        Value::Array(vec![Self::new(media_key).into()])
    }

    /// A picker value selecting several media items, in order.
    pub fn many(media_keys: &[Uuid]) -> Value {
        Value::Array(media_keys.iter().map(|&key| Self::new(key).into()).collect())
    }
}

impl From<MediaPickerValue> for Value {
    fn from(v: MediaPickerValue) -> Value {
        json!({ "key": v.key, "mediaKey": v.media_key })
    }
}

/// One link in a multi-URL picker, always typed as an external link.
#[derive(Debug, Clone)]
pub struct MultiUrlPickerValue {
    pub name: String,
    pub url: String,
    pub target: Option<String>,
}

impl MultiUrlPickerValue {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into(), target: None }
    }

    pub fn opening_in_new_tab(mut self) -> Self {
        self.target = Some("_blank".to_string());
        self
    }

    /// A picker value holding exactly this link.
    pub fn single(self) -> Value {
        Value::Array(vec![self.into()])
    }
}

impl From<MultiUrlPickerValue> for Value {
    fn from(v: MultiUrlPickerValue) -> Value {
        json!({
            "name": v.name,
            "url": v.url,
            "target": v.target,
            "type": "external",
        })
    }
}

/// One selected document in a content picker.
#[derive(Debug, Clone)]
pub struct ContentPickerValue {
    pub unique: Uuid,
}

impl ContentPickerValue {
    pub fn new(unique: Uuid) -> Self {
        Self { unique }
    }

    /// A picker value selecting exactly one document.
    pub fn single(unique: Uuid) -> Value {
        Value::Array(vec![Self::new(unique).into()])
    }
}

impl From<ContentPickerValue> for Value {
    fn from(v: ContentPickerValue) -> Value {
        json!({ "type": "document", "unique": v.unique })
    }
}
