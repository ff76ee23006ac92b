//! Row constructors for the starter content.
//!
//! Each helper appends one fully-formed row block to a [`BlockListValue`]:
//! the content item with the row's property values, and a settings item of
//! the row's settings element type with visibility defaulted to shown.

use uuid::Uuid;

use super::BlockListValue;
use super::values::{ContentPickerValue, MediaPickerValue, MultiUrlPickerValue, RichTextValue};
use crate::api::models::PropertyValue;

/// The element-type pair a row is built from: the content element and its
/// settings element.
#[derive(Debug, Clone, Copy)]
pub struct ElementKeys {
    pub content: Uuid,
    pub settings: Uuid,
}

impl ElementKeys {
    pub fn new(content: Uuid, settings: Uuid) -> Self {
        Self { content, settings }
    }
}

fn default_settings() -> Vec<PropertyValue> {
    vec![PropertyValue::new("hide", false)]
}

impl BlockListValue {
    /// A rich-text row rendering the given markup.
    pub fn add_rich_text_row(&mut self, keys: ElementKeys, markup: impl Into<String>) -> Uuid {
        let values = vec![PropertyValue::new("content", RichTextValue::new(markup))];
        self.add(keys.content, values, Some((keys.settings, default_settings())))
    }

    /// An image row showing a single media item with an optional caption.
    pub fn add_image_row(
        &mut self,
        keys: ElementKeys,
        media_key: Uuid,
        caption: Option<&str>,
    ) -> Uuid {
        let mut values = vec![PropertyValue::new("image", MediaPickerValue::single(media_key))];
        if let Some(caption) = caption {
            values.push(PropertyValue::new("caption", caption));
        }
        self.add(keys.content, values, Some((keys.settings, default_settings())))
    }

    /// An embedded-video row with an optional caption.
    pub fn add_video_row(
        &mut self,
        keys: ElementKeys,
        video_url: impl Into<String>,
        caption: Option<&str>,
    ) -> Uuid {
        let video_url: String = video_url.into();
        let mut values = vec![PropertyValue::new("videoUrl", video_url)];
        if let Some(caption) = caption {
            values.push(PropertyValue::new("caption", caption));
        }
        self.add(keys.content, values, Some((keys.settings, default_settings())))
    }

    /// A titled code snippet row.
    pub fn add_code_snippet_row(
        &mut self,
        keys: ElementKeys,
        title: impl Into<String>,
        code: impl Into<String>,
    ) -> Uuid {
        let title: String = title.into();
        let code: String = code.into();
        let values =
            vec![PropertyValue::new("title", title), PropertyValue::new("code", code)];
        self.add(keys.content, values, Some((keys.settings, default_settings())))
    }

    /// A carousel row cycling through the given media items, in order.
    pub fn add_image_carousel_row(&mut self, keys: ElementKeys, media_keys: &[Uuid]) -> Uuid {
        let values = vec![PropertyValue::new("images", MediaPickerValue::many(media_keys))];
        self.add(keys.content, values, Some((keys.settings, default_settings())))
    }

    /// A row listing the newest articles under the picked article list page.
    pub fn add_latest_articles_row(
        &mut self,
        keys: ElementKeys,
        article_list: Uuid,
        page_size: u32,
    ) -> Uuid {
        let values = vec![
            PropertyValue::new("articleList", ContentPickerValue::single(article_list)),
            PropertyValue::new("pageSize", page_size),
            PropertyValue::new("showPagination", true),
        ];
        self.add(keys.content, values, Some((keys.settings, default_settings())))
    }

    /// An icon link row pairing an icon media item with an external link.
    pub fn add_icon_link_row(
        &mut self,
        keys: ElementKeys,
        icon_key: Uuid,
        link: MultiUrlPickerValue,
    ) -> Uuid {
        let values = vec![
            PropertyValue::new("icon", MediaPickerValue::single(icon_key)),
            PropertyValue::new("link", link.single()),
        ];
        self.add(keys.content, values, Some((keys.settings, default_settings())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys() -> ElementKeys {
        ElementKeys::new(Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn test_rich_text_row_is_shown_by_default() {
        let mut list = BlockListValue::new();
        list.add_rich_text_row(keys(), "<p>Welcome</p>");

        let value = list.to_value().unwrap();
        assert_eq!(value["contentData"][0]["values"][0]["alias"], "content");
        assert_eq!(value["contentData"][0]["values"][0]["value"]["markup"], "<p>Welcome</p>");
        assert_eq!(value["settingsData"][0]["values"][0]["alias"], "hide");
        assert_eq!(value["settingsData"][0]["values"][0]["value"], json!(false));
    }

    #[test]
    fn test_image_row_caption_is_optional() {
        let mut list = BlockListValue::new();
        list.add_image_row(keys(), Uuid::new_v4(), None);
        list.add_image_row(keys(), Uuid::new_v4(), Some("A caption"));

        let value = list.to_value().unwrap();
        assert_eq!(value["contentData"][0]["values"].as_array().unwrap().len(), 1);
        assert_eq!(value["contentData"][1]["values"][1]["value"], "A caption");
    }

    #[test]
    fn test_carousel_row_preserves_image_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut list = BlockListValue::new();
        list.add_image_carousel_row(keys(), &[first, second]);

        let value = list.to_value().unwrap();
        let images = value["contentData"][0]["values"][0]["value"].as_array().unwrap();
        assert_eq!(images[0]["mediaKey"], json!(first));
        assert_eq!(images[1]["mediaKey"], json!(second));
    }

    #[test]
    fn test_latest_articles_row_points_at_list_page() {
        let article_list = Uuid::new_v4();
        let mut list = BlockListValue::new();
        list.add_latest_articles_row(keys(), article_list, 10);

        let value = list.to_value().unwrap();
        let values = value["contentData"][0]["values"].as_array().unwrap();
        assert_eq!(values[0]["value"][0]["unique"], json!(article_list));
        assert_eq!(values[1]["value"], json!(10));
    }
}
