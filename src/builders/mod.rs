//! Provisioning builders.
//!
//! Each submodule provisions one resource category against a fresh
//! deployment. The builders share a [`ProvisionContext`] carrying the
//! authenticated client, the identifier resolver, and the on-disk asset
//! catalog (view files and media files).
//!
//! Phases depend on each other through the remote system, so ordering
//! matters: dictionary and templates first, then media, then the data-type,
//! element-type, and document-type schema, then the documents themselves,
//! with late data-type passes wiring up references that only exist once the
//! schema and content are in place. [`PHASES`] lists the canonical order; the
//! CLI executes it.

pub mod compositions;
pub mod data_types;
pub mod dictionary;
pub mod document_types;
pub mod documents;
pub mod element_types;
pub mod media;
pub mod names;
pub mod templates;

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::api::ManagementClient;
use crate::api::models::PropertyTypeModel;
use crate::core::{CmskitError, Result};
use crate::resolver::IdentifierResolver;

/// Provisioning phases in execution order.
pub const PHASES: &[&str] = &[
    "dictionary",
    "templates",
    "media",
    "data-types",
    "compositions",
    "element-types",
    "document-types",
    "documents",
];

/// Derive an alias from a display name: `"Article List"` becomes
/// `"articleList"`. Used for templates, element types, document types, and
/// their properties.
pub fn camel_alias(name: &str) -> String {
    let mut alias = String::with_capacity(name.len());
    for (i, word) in name.split_whitespace().enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                alias.extend(first.to_lowercase());
            } else {
                alias.extend(first.to_uppercase());
            }
            alias.extend(chars);
        }
    }
    alias
}

/// A property whose alias is the camelCase form of its name.
pub(crate) fn property(
    name: &str,
    data_type: Uuid,
    container: Uuid,
    sort_order: i32,
) -> PropertyTypeModel {
    property_aliased(name, &camel_alias(name), data_type, container, sort_order)
}

/// A property with an explicit alias, for the conventional aliases the
/// rendering layer expects (e.g. `umbracoNaviHide`).
pub(crate) fn property_aliased(
    name: &str,
    alias: &str,
    data_type: Uuid,
    container: Uuid,
    sort_order: i32,
) -> PropertyTypeModel {
    PropertyTypeModel {
        name: name.to_string(),
        alias: alias.to_string(),
        description: None,
        sort_order,
        data_type: data_type.into(),
        container: Some(container.into()),
        validation: None,
    }
}

/// Shared state for one provisioning run.
pub struct ProvisionContext {
    pub client: ManagementClient,
    pub resolver: IdentifierResolver<ManagementClient>,
    pub assets: AssetCatalog,
}

impl ProvisionContext {
    pub fn new(client: ManagementClient, assets: AssetCatalog) -> Self {
        let resolver = IdentifierResolver::new(client.clone());
        Self { client, resolver, assets }
    }
}

/// Read access to the asset directory shipped alongside the tool.
///
/// Views live under `views/`, media files under `media/`. Missing files are
/// reported with the full path so the operator can see what the run expected.
pub struct AssetCatalog {
    root: PathBuf,
}

impl AssetCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a file as bytes, failing with the resolved path if absent.
    pub fn read_bytes(&self, relative: &str) -> Result<Vec<u8>> {
        let path = self.root.join(relative);
        if !path.exists() {
            return Err(CmskitError::AssetNotFound { path: path.display().to_string() });
        }
        Ok(std::fs::read(&path)?)
    }

    /// Read a file as UTF-8 text, failing with the resolved path if absent.
    pub fn read_text(&self, relative: &str) -> Result<String> {
        let path = self.root.join(relative);
        if !path.exists() {
            return Err(CmskitError::AssetNotFound { path: path.display().to_string() });
        }
        Ok(std::fs::read_to_string(&path)?)
    }
}
