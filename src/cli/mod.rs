//! Command-line interface for cmskit.
//!
//! Each command is implemented in its own module with its own argument
//! structure and execution logic. The root [`Cli`] holds the global options
//! shared by every command:
//!
//! - `--verbose` / `--quiet` control log verbosity
//! - `--config` points at an alternative configuration file
//!
//! # Commands
//!
//! - `provision` - provision a fresh deployment end to end
//! - `check` - verify configuration, connectivity, and local assets
//!
//! ```bash
//! cmskit check
//! cmskit provision --assets ./assets
//! cmskit provision --only dictionary --only templates
//! ```

mod check;
mod provision;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::CmsConfig;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "cmskit",
    about = "Provision a CMS deployment with a complete starter site",
    version,
    long_about = "cmskit drives the management API of a fresh CMS deployment to create \
                  dictionary items, templates, media, the document-type schema, and \
                  published starter content."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file (defaults to cmskit.toml, then
    /// ~/.cmskit/config.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision the deployment: dictionary, templates, media, schema, and
    /// published content.
    Provision(provision::ProvisionCommand),

    /// Verify configuration, API connectivity, and the local asset files
    /// without changing anything.
    Check(check::CheckCommand),
}

impl Cli {
    fn init_logging(&self) {
        let default = if self.verbose {
            "cmskit=debug"
        } else if self.quiet {
            "cmskit=error"
        } else {
            "cmskit=info"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
    }

    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();
        let config = CmsConfig::load(self.config.as_deref())?;
        match self.command {
            Commands::Provision(cmd) => cmd.execute(&config).await,
            Commands::Check(cmd) => cmd.execute(&config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["cmskit", "--verbose", "--quiet", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_provision_accepts_repeated_only() {
        let cli = Cli::try_parse_from([
            "cmskit",
            "provision",
            "--only",
            "dictionary",
            "--only",
            "templates",
        ])
        .unwrap();
        match cli.command {
            Commands::Provision(cmd) => assert_eq!(cmd.only, ["dictionary", "templates"]),
            Commands::Check(_) => panic!("expected provision"),
        }
    }
}
