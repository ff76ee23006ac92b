//! Starter content.
//!
//! Documents are provisioned in two passes with locally generated keys:
//! the first pass creates every document so cross-references can point at
//! keys that already exist, the second fills in the property values
//! (including the block-list content that references media and other
//! documents), and a final publish of the root with descendants makes the
//! whole site live.

use tracing::info;
use uuid::Uuid;

use super::{ProvisionContext, names};
use crate::api::models::{
    CreateDocumentRequest, PropertyValue, UpdateDocumentRequest, VariantModel,
};
use crate::blocks::BlockListValue;
use crate::blocks::rows::ElementKeys;
use crate::blocks::values::{ContentPickerValue, MultiUrlPickerValue};
use crate::core::Result;

/// Keys for every document the run creates, generated up front.
pub struct DocumentsBuilder {
    home: Uuid,
    article_list: Uuid,
    articles: [Uuid; 3],
    category_list: Uuid,
    categories: [Uuid; 3],
    error: Uuid,
}

const ARTICLES: [(&str, &str, &str); 3] = [
    ("Getting Started", "2026-06-02 00:00:00", "Erica Jensen"),
    ("Working With Blocks", "2026-07-15 00:00:00", "Malik Osei"),
    ("Publishing Your Site", "2026-08-10 00:00:00", "Erica Jensen"),
];

const CATEGORIES: [(&str, &str); 3] = [
    ("Tutorials", "Step by step guides for common tasks."),
    ("News", "Announcements and project updates."),
    ("Releases", "Notes for every published version."),
];

impl DocumentsBuilder {
    pub fn new() -> Self {
        Self {
            home: Uuid::new_v4(),
            article_list: Uuid::new_v4(),
            articles: [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()],
            category_list: Uuid::new_v4(),
            categories: [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()],
            error: Uuid::new_v4(),
        }
    }

    /// Key of the site root, needed by the late data-type pass.
    pub fn home_key(&self) -> Uuid {
        self.home
    }

    async fn create(
        &self,
        ctx: &ProvisionContext,
        id: Uuid,
        parent: Option<Uuid>,
        name: &str,
        document_type: &str,
        template: &str,
    ) -> Result<()> {
        let document_type = ctx
            .resolver
            .document_type_id(&[names::document_types::FOLDER], document_type)
            .await?;
        let template = ctx.resolver.template_id(template).await?;
        info!(name, "creating document");
        ctx.client
            .post_document(&CreateDocumentRequest {
                id,
                parent: parent.map(Into::into),
                document_type: document_type.into(),
                template: Some(template.into()),
                variants: vec![VariantModel::named(name)],
                values: vec![],
            })
            .await
    }

    /// First pass: the whole tree as empty documents.
    pub async fn create_all(&self, ctx: &ProvisionContext) -> Result<()> {
        self.create(
            ctx,
            self.home,
            None,
            "Home",
            names::document_types::HOME,
            names::templates::HOME,
        )
        .await?;
        self.create(
            ctx,
            self.article_list,
            Some(self.home),
            "Articles",
            names::document_types::ARTICLE_LIST,
            names::templates::ARTICLE_LIST,
        )
        .await?;
        for (id, (name, _, _)) in self.articles.iter().zip(ARTICLES) {
            self.create(
                ctx,
                *id,
                Some(self.article_list),
                name,
                names::document_types::ARTICLE,
                names::templates::ARTICLE,
            )
            .await?;
        }
        self.create(
            ctx,
            self.category_list,
            Some(self.home),
            "Categories",
            names::document_types::CATEGORY_LIST,
            names::templates::CATEGORY_LIST,
        )
        .await?;
        for (id, (name, _)) in self.categories.iter().zip(CATEGORIES) {
            self.create(
                ctx,
                *id,
                Some(self.category_list),
                name,
                names::document_types::CATEGORY,
                names::templates::CATEGORY,
            )
            .await?;
        }
        self.create(
            ctx,
            self.error,
            Some(self.home),
            "Page Not Found",
            names::document_types::ERROR,
            names::templates::ERROR,
        )
        .await?;
        Ok(())
    }

    async fn row_keys(&self, ctx: &ProvisionContext, row: &str) -> Result<ElementKeys> {
        let content =
            ctx.resolver.document_type_id(&[names::element_types::FOLDER], row).await?;
        let settings = ctx
            .resolver
            .document_type_id(&[names::element_types::FOLDER], names::element_types::ROW_SETTINGS)
            .await?;
        Ok(ElementKeys::new(content, settings))
    }

    async fn update(
        &self,
        ctx: &ProvisionContext,
        id: Uuid,
        name: &str,
        template: &str,
        values: Vec<PropertyValue>,
    ) -> Result<()> {
        let template = ctx.resolver.template_id(template).await?;
        info!(name, "updating document");
        ctx.client
            .put_document(
                id,
                &UpdateDocumentRequest {
                    template: Some(template.into()),
                    variants: vec![VariantModel::named(name)],
                    values,
                },
            )
            .await
    }

    async fn update_home(&self, ctx: &ProvisionContext) -> Result<()> {
        let rich_text = self.row_keys(ctx, names::element_types::RICH_TEXT_ROW).await?;
        let latest = self.row_keys(ctx, names::element_types::LATEST_ARTICLES_ROW).await?;
        let image = self.row_keys(ctx, names::element_types::IMAGE_ROW).await?;
        let icon_link = self.row_keys(ctx, names::element_types::ICON_LINK_ROW).await?;

        let laptop = ctx
            .resolver
            .media_id(names::media::SAMPLE_IMAGES_FOLDER, names::media::LAPTOP)
            .await?;

        let mut main = BlockListValue::new();
        main.add_rich_text_row(
            rich_text,
            "<h2>Welcome</h2><p>A clean starting point for your next site.</p>",
        );
        main.add_image_row(image, laptop, Some("Write once, publish everywhere"));
        main.add_latest_articles_row(latest, self.article_list, 10);

        let mut icons = BlockListValue::new();
        let links: [(&str, &str); 4] = [
            (names::media::GITHUB, "https://github.com"),
            (names::media::DISCORD, "https://discord.com"),
            (names::media::BLUESKY, "https://bsky.app"),
            (names::media::YOUTUBE, "https://youtube.com"),
        ];
        for (icon, url) in links {
            let media = ctx.resolver.media_id(names::media::SOCIAL_ICONS_FOLDER, icon).await?;
            let link = MultiUrlPickerValue::new(icon, url).opening_in_new_tab();
            icons.add_icon_link_row(icon_link, media, link);
        }

        self.update(
            ctx,
            self.home,
            "Home",
            names::templates::HOME,
            vec![
                PropertyValue::new("siteName", "Clean Blog"),
                PropertyValue::new("mainContent", main.to_value()?),
                PropertyValue::new("socialIconLinks", icons.to_value()?),
            ],
        )
        .await
    }

    async fn update_articles(&self, ctx: &ProvisionContext) -> Result<()> {
        let rich_text = self.row_keys(ctx, names::element_types::RICH_TEXT_ROW).await?;
        let code = self.row_keys(ctx, names::element_types::CODE_SNIPPET_ROW).await?;
        let carousel = self.row_keys(ctx, names::element_types::IMAGE_CAROUSEL_ROW).await?;
        let video = self.row_keys(ctx, names::element_types::VIDEO_ROW).await?;

        let coding = ctx
            .resolver
            .media_id(names::media::SAMPLE_IMAGES_FOLDER, names::media::CODING)
            .await?;
        let notebook = ctx
            .resolver
            .media_id(names::media::SAMPLE_IMAGES_FOLDER, names::media::NOTEBOOK)
            .await?;

        for (i, (id, (name, date, author))) in self.articles.iter().zip(ARTICLES).enumerate() {
            let mut main = BlockListValue::new();
            main.add_rich_text_row(
                rich_text,
                format!("<p>{name} walks through the basics, one step at a time.</p>"),
            );
            match i {
                0 => {
                    main.add_code_snippet_row(
                        code,
                        "Install",
                        "dotnet new install clean && dotnet new clean",
                    );
                }
                1 => {
                    main.add_image_carousel_row(carousel, &[coding, notebook]);
                }
                _ => {
                    main.add_video_row(
                        video,
                        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                        Some("A short walkthrough"),
                    );
                }
            }

            let category = self.categories[i.min(self.categories.len() - 1)];
            self.update(
                ctx,
                *id,
                name,
                names::templates::ARTICLE,
                vec![
                    PropertyValue::new("articleDate", date),
                    PropertyValue::new("author", author),
                    PropertyValue::new("categories", ContentPickerValue::single(category)),
                    PropertyValue::new("mainContent", main.to_value()?),
                ],
            )
            .await?;
        }
        Ok(())
    }

    /// Second pass: fill in every document's values.
    pub async fn update_all(&self, ctx: &ProvisionContext) -> Result<()> {
        let rich_text = self.row_keys(ctx, names::element_types::RICH_TEXT_ROW).await?;

        self.update_home(ctx).await?;

        let mut list_intro = BlockListValue::new();
        list_intro.add_rich_text_row(rich_text, "<p>Everything we have written so far.</p>");
        self.update(
            ctx,
            self.article_list,
            "Articles",
            names::templates::ARTICLE_LIST,
            vec![PropertyValue::new("mainContent", list_intro.to_value()?)],
        )
        .await?;

        self.update_articles(ctx).await?;

        for (id, (name, description)) in self.categories.iter().zip(CATEGORIES) {
            self.update(
                ctx,
                *id,
                name,
                names::templates::CATEGORY,
                vec![PropertyValue::new("categoryDescription", description)],
            )
            .await?;
        }

        let mut error_body = BlockListValue::new();
        error_body.add_rich_text_row(
            rich_text,
            "<p>The page you are looking for does not exist. Try the navigation above.</p>",
        );
        self.update(
            ctx,
            self.error,
            "Page Not Found",
            names::templates::ERROR,
            vec![PropertyValue::new("mainContent", error_body.to_value()?)],
        )
        .await?;
        Ok(())
    }

    /// Publish the root and everything beneath it.
    pub async fn publish(&self, ctx: &ProvisionContext) -> Result<()> {
        info!("publishing site root with descendants");
        ctx.client.put_document_publish_with_descendants(self.home, true).await
    }
}

impl Default for DocumentsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run all three passes and return the site root's key.
pub async fn build(ctx: &ProvisionContext) -> Result<Uuid> {
    let documents = DocumentsBuilder::new();
    documents.create_all(ctx).await?;
    documents.update_all(ctx).await?;
    documents.publish(ctx).await?;
    Ok(documents.home_key())
}
