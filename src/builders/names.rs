//! The names every builder and resolver lookup agrees on.
//!
//! Resources are created under these names and later resolved back by them,
//! so each name appears exactly once in the codebase.

/// Data types created by the provisioning run, plus the built-in ones the
/// schema references.
pub mod data_types {
    pub const BLOCK_LIST_MAIN_CONTENT: &str = "Block List - Main Content";
    pub const BLOCK_LIST_ICON_LIST: &str = "Block List - Icon List";
    pub const MEDIA_PICKER_SVG: &str = "Media Picker - SVG";
    pub const CONTENT_PICKER_CATEGORIES: &str = "Content Picker - Categories";
    pub const URL_PICKER_SINGLE: &str = "Url Picker - Single";
    pub const DROPDOWN_SPACING: &str = "Dropdown - Spacing";
    pub const TOGGLE_DEFAULT_TRUE: &str = "Toggle - Default True";

    // built-ins present on every fresh deployment
    pub const TEXTSTRING: &str = "Textstring";
    pub const TEXTAREA: &str = "Textarea";
    pub const RICHTEXT_EDITOR: &str = "Richtext editor";
    pub const IMAGE_MEDIA_PICKER: &str = "Image Media Picker";
    pub const MULTIPLE_IMAGE_MEDIA_PICKER: &str = "Multiple Image Media Picker";
    pub const CONTENT_PICKER: &str = "Content Picker";
    pub const NUMERIC: &str = "Numeric";
    pub const TRUE_FALSE: &str = "True/false";
    pub const DATE_PICKER: &str = "Date Picker";
}

/// Built-in media types referenced when creating folders and files.
pub mod media_types {
    pub const FOLDER: &str = "Folder";
    pub const SVG: &str = "Vector Graphics (SVG)";
}

/// Root-level media folders and the items inside them.
pub mod media {
    pub const SOCIAL_ICONS_FOLDER: &str = "Social Icons";
    pub const SAMPLE_IMAGES_FOLDER: &str = "Sample Images";

    pub const GITHUB: &str = "Github";
    pub const DISCORD: &str = "Discord";
    pub const BLUESKY: &str = "Bluesky";
    pub const YOUTUBE: &str = "Youtube";

    pub const CODING: &str = "Coding";
    pub const LAPTOP: &str = "Laptop";
    pub const NOTEBOOK: &str = "Notebook";
}

/// Composition element types, created in the "Compositions" folder.
pub mod compositions {
    pub const FOLDER: &str = "Compositions";

    pub const HIDE_PROPERTY: &str = "Hide Property";
    pub const CONTENT_CONTROLS: &str = "Content Controls";
    pub const SEO_CONTROLS: &str = "SEO Controls";
    pub const VISIBILITY_CONTROLS: &str = "Visibility Controls";
    pub const ARTICLE_CONTROLS: &str = "Article Controls";
}

/// Row element types, created in the "Rows" folder.
pub mod element_types {
    pub const FOLDER: &str = "Rows";

    pub const RICH_TEXT_ROW: &str = "Rich Text Row";
    pub const IMAGE_ROW: &str = "Image Row";
    pub const VIDEO_ROW: &str = "Video Row";
    pub const CODE_SNIPPET_ROW: &str = "Code Snippet Row";
    pub const IMAGE_CAROUSEL_ROW: &str = "Image Carousel Row";
    pub const LATEST_ARTICLES_ROW: &str = "Latest Articles Row";
    pub const ICON_LINK_ROW: &str = "Icon Link Row";
    pub const ROW_SETTINGS: &str = "Row Settings";

    pub const CONTENT_ROWS: &[&str] = &[
        RICH_TEXT_ROW,
        IMAGE_ROW,
        VIDEO_ROW,
        CODE_SNIPPET_ROW,
        IMAGE_CAROUSEL_ROW,
        LATEST_ARTICLES_ROW,
        ICON_LINK_ROW,
    ];
}

/// Page document types, created in the "Pages" folder.
pub mod document_types {
    pub const FOLDER: &str = "Pages";

    pub const HOME: &str = "Home";
    pub const ARTICLE_LIST: &str = "Article List";
    pub const ARTICLE: &str = "Article";
    pub const CATEGORY_LIST: &str = "Category List";
    pub const CATEGORY: &str = "Category";
    pub const ERROR: &str = "Error";
}

/// Templates, matching the view files under `assets/views/`.
pub mod templates {
    pub const HOME: &str = "Home";
    pub const ARTICLE_LIST: &str = "Article List";
    pub const ARTICLE: &str = "Article";
    pub const CATEGORY_LIST: &str = "Category List";
    pub const CATEGORY: &str = "Category";
    pub const ERROR: &str = "Error";

    /// Templates nested under the master template, in creation order.
    pub const PAGES: &[&str] = &[HOME, ARTICLE_LIST, ARTICLE, CATEGORY_LIST, CATEGORY, ERROR];
}
