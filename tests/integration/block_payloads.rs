//! Full block-list payloads assembled through the public API.

use cmskit::blocks::rows::ElementKeys;
use cmskit::blocks::values::MultiUrlPickerValue;
use cmskit::blocks::{BLOCK_LIST_EDITOR_ALIAS, BlockListValue};
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_home_page_payload_shape() {
    let rich_text = ElementKeys::new(Uuid::new_v4(), Uuid::new_v4());
    let image = ElementKeys::new(rich_text.content, rich_text.settings);
    let latest = ElementKeys::new(Uuid::new_v4(), rich_text.settings);

    let article_list = Uuid::new_v4();
    let laptop = Uuid::new_v4();

    let mut main = BlockListValue::new();
    main.add_rich_text_row(rich_text, "<h2>Welcome</h2>");
    main.add_image_row(image, laptop, Some("caption"));
    main.add_latest_articles_row(latest, article_list, 10);

    let value = main.to_value().unwrap();
    let layout = value["layout"][BLOCK_LIST_EDITOR_ALIAS].as_array().unwrap();
    let content = value["contentData"].as_array().unwrap();
    let settings = value["settingsData"].as_array().unwrap();
    let expose = value["expose"].as_array().unwrap();

    // the four collections stay in lockstep
    assert_eq!(layout.len(), 3);
    assert_eq!(content.len(), 3);
    assert_eq!(settings.len(), 3);
    assert_eq!(expose.len(), 3);

    for (i, entry) in layout.iter().enumerate() {
        assert_eq!(entry["contentKey"], content[i]["key"]);
        assert_eq!(entry["settingsKey"], settings[i]["key"]);
        assert_eq!(expose[i]["contentKey"], content[i]["key"]);
    }

    // every settings item defaults to visible
    for item in settings {
        assert_eq!(item["values"][0]["alias"], "hide");
        assert_eq!(item["values"][0]["value"], json!(false));
    }

    // the latest-articles row references the picked list page
    assert_eq!(content[2]["values"][0]["value"][0]["unique"], json!(article_list));
}

#[test]
fn test_icon_list_payload_round_trips_links() {
    let icon_link = ElementKeys::new(Uuid::new_v4(), Uuid::new_v4());
    let mut icons = BlockListValue::new();

    let targets = ["https://github.com", "https://discord.com"];
    for url in targets {
        let media = Uuid::new_v4();
        let link = MultiUrlPickerValue::new("link", url).opening_in_new_tab();
        icons.add_icon_link_row(icon_link, media, link);
    }

    let value = icons.to_value().unwrap();
    let content = value["contentData"].as_array().unwrap();
    assert_eq!(content.len(), targets.len());
    for (item, url) in content.iter().zip(targets) {
        assert_eq!(item["contentTypeKey"], json!(icon_link.content));
        assert_eq!(item["values"][1]["value"][0]["url"], url);
        assert_eq!(item["values"][1]["value"][0]["type"], "external");
        assert_eq!(item["values"][1]["value"][0]["target"], "_blank");
    }
}

#[test]
fn test_empty_payload_serializes_all_collections() {
    let value = BlockListValue::new().to_value().unwrap();
    assert!(value["layout"][BLOCK_LIST_EDITOR_ALIAS].as_array().unwrap().is_empty());
    assert!(value["contentData"].as_array().unwrap().is_empty());
    assert!(value["settingsData"].as_array().unwrap().is_empty());
    assert!(value["expose"].as_array().unwrap().is_empty());
}
