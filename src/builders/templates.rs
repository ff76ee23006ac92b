//! Template creation from the shipped view files.
//!
//! The master and sitemap templates are created first so they exist at the
//! root of the template tree; the page templates follow and nest themselves
//! under the master through the `Layout` declaration in their view content.
//! The resolver later relies on exactly this arrangement.

use tracing::info;

use super::{ProvisionContext, camel_alias, names};
use crate::api::models::CreateTemplateRequest;
use crate::constants::{MASTER_TEMPLATE, XML_SITEMAP_TEMPLATE};
use crate::core::Result;

/// Relative paths of every view file the build expects under the asset
/// directory.
pub fn view_files() -> Vec<String> {
    [MASTER_TEMPLATE, XML_SITEMAP_TEMPLATE]
        .iter()
        .chain(names::templates::PAGES)
        .map(|name| format!("views/{}.cshtml", camel_alias(name)))
        .collect()
}

async fn create(ctx: &ProvisionContext, name: &str) -> Result<()> {
    let alias = camel_alias(name);
    let content = ctx.assets.read_text(&format!("views/{alias}.cshtml"))?;
    info!(name, alias = %alias, "creating template");
    ctx.client.post_template(&CreateTemplateRequest { name: name.to_string(), alias, content }).await
}

/// Create the root templates, then every page template under the master.
pub async fn build(ctx: &ProvisionContext) -> Result<()> {
    create(ctx, MASTER_TEMPLATE).await?;
    create(ctx, XML_SITEMAP_TEMPLATE).await?;
    for name in names::templates::PAGES {
        create(ctx, name).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_templates_exclude_roots() {
        assert!(!names::templates::PAGES.contains(&MASTER_TEMPLATE));
        assert!(!names::templates::PAGES.contains(&XML_SITEMAP_TEMPLATE));
    }
}
