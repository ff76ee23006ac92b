//! cmskit - starter-site provisioning for a headless CMS deployment
//!
//! cmskit drives the management API of a fresh deployment to stand up a
//! complete starter site: dictionary items, templates, media, the data-type
//! and document-type schema, and published content wired together with
//! block-list rows.
//!
//! # Architecture
//!
//! - [`cli`] - command-line interface (`provision`, `check`)
//! - [`config`] - connection configuration from TOML and environment
//! - [`core`] - error taxonomy and user-facing error reporting
//! - [`auth`] - cached client-credentials token handling
//! - [`api`] - the management API transport and wire models
//! - [`resolver`] - name to identifier resolution with per-category caches
//! - [`blocks`] - block-list payload construction
//! - [`builders`] - the provisioning phases themselves
//!
//! # Example
//!
//! ```rust,ignore
//! use cmskit::api::ManagementClient;
//! use cmskit::builders::{AssetCatalog, ProvisionContext, dictionary};
//! use cmskit::config::CmsConfig;
//!
//! # async fn run() -> cmskit::core::Result<()> {
//! let config = CmsConfig::load(None)?;
//! let client = ManagementClient::new(&config)?;
//! let ctx = ProvisionContext::new(client, AssetCatalog::new("assets"));
//! dictionary::build(&ctx).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod blocks;
pub mod builders;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod resolver;

pub use crate::core::{CmskitError, Result};
