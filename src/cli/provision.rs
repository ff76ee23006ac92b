//! The `provision` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::api::ManagementClient;
use crate::builders::{
    AssetCatalog, PHASES, ProvisionContext, compositions, data_types, dictionary, document_types,
    documents, element_types, media, templates,
};
use crate::config::CmsConfig;
use crate::core::CmskitError;

/// Run the provisioning phases against the configured deployment.
#[derive(Args)]
pub struct ProvisionCommand {
    /// Directory holding the view and media assets.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Run only the named phases. May be repeated; phases always execute in
    /// their canonical order regardless of the order given here.
    #[arg(long = "only", value_name = "PHASE")]
    pub(super) only: Vec<String>,
}

impl ProvisionCommand {
    pub async fn execute(self, config: &CmsConfig) -> Result<()> {
        for phase in &self.only {
            if !PHASES.contains(&phase.as_str()) {
                return Err(CmskitError::Config {
                    message: format!(
                        "unknown phase `{phase}`; expected one of: {}",
                        PHASES.join(", ")
                    ),
                }
                .into());
            }
        }
        let enabled =
            |name: &str| self.only.is_empty() || self.only.iter().any(|only| only == name);

        let client = ManagementClient::new(config)?;
        let ctx = ProvisionContext::new(client, AssetCatalog::new(&self.assets));

        if enabled("dictionary") {
            info!("phase: dictionary");
            dictionary::build(&ctx).await?;
        }
        if enabled("templates") {
            info!("phase: templates");
            templates::build(&ctx).await?;
        }
        if enabled("media") {
            info!("phase: media");
            media::build(&ctx).await?;
        }
        if enabled("data-types") {
            info!("phase: data-types");
            data_types::build(&ctx).await?;
        }
        if enabled("compositions") {
            info!("phase: compositions");
            compositions::build(&ctx).await?;
        }
        if enabled("element-types") {
            info!("phase: element-types");
            element_types::build(&ctx).await?;
        }
        if enabled("document-types") {
            info!("phase: document-types");
            document_types::build(&ctx).await?;
            data_types::update_document_types(&ctx).await?;
        }
        if enabled("documents") {
            info!("phase: documents");
            let home = documents::build(&ctx).await?;
            data_types::update_documents(&ctx, home).await?;
        }

        info!("provisioning complete");
        Ok(())
    }
}
