//! cmskit CLI entry point
//!
//! Handles command-line argument parsing, error display, and command
//! execution. The commands:
//! - `provision` - provision a fresh deployment end to end
//! - `check` - verify configuration, connectivity, and local assets

use anyhow::Result;
use clap::Parser;
use cmskit::cli;
use cmskit::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
