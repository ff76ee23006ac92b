//! Dictionary items for the starter site's fixed UI strings.

use tracing::info;

use super::ProvisionContext;
use crate::api::models::{CreateDictionaryItemRequest, DictionaryTranslation};
use crate::constants::DEFAULT_ISO_CODE;
use crate::core::Result;

const ITEMS: &[(&str, &str)] = &[
    ("Article.By", "By"),
    ("Article.MinuteToRead", "minute read"),
    ("Article.Next", "Next article"),
    ("Article.Previous", "Previous article"),
    ("Article.RelatedArticles", "Related articles"),
    ("ArticleList.PageTitle", "Articles"),
    ("Category.Articles", "Articles in this category"),
    ("Error.Message", "The page you requested could not be found."),
    ("Error.PageTitle", "Page not found"),
    ("Footer.Copyright", "All rights reserved."),
    ("Navigation.Home", "Home"),
    ("Navigation.Menu", "Menu"),
    ("Navigation.SkipToContent", "Skip to content"),
    ("Paging.Next", "Next"),
    ("Paging.Of", "of"),
    ("Paging.Page", "Page"),
    ("Paging.Previous", "Previous"),
    ("Search.NoResults", "No results found"),
    ("Search.Placeholder", "Search the site"),
    ("Search.Results", "Search results"),
];

/// Create every dictionary item with its default-culture translation.
pub async fn build(ctx: &ProvisionContext) -> Result<()> {
    info!(count = ITEMS.len(), "creating dictionary items");
    for (name, translation) in ITEMS {
        let request = CreateDictionaryItemRequest {
            name: (*name).to_string(),
            translations: vec![DictionaryTranslation {
                iso_code: DEFAULT_ISO_CODE.to_string(),
                translation: (*translation).to_string(),
            }],
        };
        ctx.client.post_dictionary_item(&request).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_keys_are_unique_and_sorted() {
        let mut keys: Vec<&str> = ITEMS.iter().map(|(k, _)| *k).collect();
        let original = keys.clone();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys, original);
    }

    #[test]
    fn test_translations_are_not_empty() {
        assert!(ITEMS.iter().all(|(_, t)| !t.is_empty()));
    }
}
