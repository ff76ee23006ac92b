//! The `check` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::api::{ManagementClient, TreeApi};
use crate::builders::{AssetCatalog, media, templates};
use crate::config::CmsConfig;
use crate::core::CmskitError;

/// Verify that a provisioning run could start: the configuration is valid,
/// the API accepts our credentials, and every asset file is on disk.
#[derive(Args)]
pub struct CheckCommand {
    /// Directory holding the view and media assets.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

impl CheckCommand {
    pub async fn execute(self, config: &CmsConfig) -> Result<()> {
        println!("host: {}", config.host);

        let catalog = AssetCatalog::new(&self.assets);
        let mut missing = Vec::new();
        for file in templates::view_files().into_iter().chain(media::asset_files()) {
            if catalog.read_bytes(&file).is_err() {
                missing.push(file);
            }
        }
        if missing.is_empty() {
            println!("{} all asset files present", "ok".green().bold());
        } else {
            for file in &missing {
                println!("{} missing asset: {file}", "missing".red().bold());
            }
            return Err(CmskitError::AssetNotFound { path: missing.remove(0) }.into());
        }

        // an authenticated listing proves both the credentials and the API
        let client = ManagementClient::new(config)?;
        let page = client.data_type_tree_root(0, 1).await?;
        println!(
            "{} authenticated; management API reachable ({} data types)",
            "ok".green().bold(),
            page.total
        );
        Ok(())
    }
}
