//! Connection configuration.
//!
//! The tool needs three things to reach a deployment: the host URL and the
//! client-credentials pair of the back-office API user. They are read from a
//! TOML file and may be overridden individually through environment
//! variables, so secrets can stay out of checked-in files.
//!
//! Resolution order for the file:
//! 1. an explicit `--config` path
//! 2. the `CMSKIT_CONFIG` environment variable
//! 3. `cmskit.toml` in the current directory
//! 4. `~/.cmskit/config.toml`
//!
//! `CMSKIT_HOST`, `CMSKIT_CLIENT_ID`, and `CMSKIT_CLIENT_SECRET` override the
//! corresponding file fields and can stand alone when no file exists.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::constants::TOKEN_ENDPOINT;
use crate::core::{CmskitError, Result};

/// Connection settings for one deployment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmsConfig {
    /// Base URL of the deployment, e.g. `https://localhost:44331`.
    #[serde(default)]
    pub host: String,
    /// Client id of the back-office API user.
    #[serde(default)]
    pub client_id: String,
    /// Client secret of the back-office API user.
    #[serde(default)]
    pub client_secret: String,
}

impl CmsConfig {
    /// Load configuration, apply environment overrides, and validate.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::locate(explicit)? {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| CmskitError::Config {
            message: format!("cannot read {}: {err}", path.display()),
        })?;
        Ok(toml::from_str(&contents)?)
    }

    fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CmskitError::Config {
                    message: format!("configuration file not found: {}", path.display()),
                });
            }
            return Ok(Some(path.to_path_buf()));
        }

        if let Ok(path) = std::env::var("CMSKIT_CONFIG") {
            return Ok(Some(PathBuf::from(path)));
        }

        let local = PathBuf::from("cmskit.toml");
        if local.exists() {
            return Ok(Some(local));
        }

        if let Some(home) = dirs::home_dir() {
            let global = home.join(".cmskit").join("config.toml");
            if global.exists() {
                return Ok(Some(global));
            }
        }

        Ok(None)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("CMSKIT_HOST") {
            self.host = host;
        }
        if let Ok(client_id) = std::env::var("CMSKIT_CLIENT_ID") {
            self.client_id = client_id;
        }
        if let Ok(client_secret) = std::env::var("CMSKIT_CLIENT_SECRET") {
            self.client_secret = client_secret;
        }
    }

    /// Check that every required field is present and plausible.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(CmskitError::Config {
                message: "no host configured (set `host` in cmskit.toml or CMSKIT_HOST)".into(),
            });
        }
        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(CmskitError::Config {
                message: format!("host must be an http(s) URL, got: {}", self.host),
            });
        }
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(CmskitError::Config {
                message: "missing API credentials (set `client_id` and `client_secret`, \
                          or CMSKIT_CLIENT_ID and CMSKIT_CLIENT_SECRET)"
                    .into(),
            });
        }
        Ok(())
    }

    /// Absolute URL of the back-office token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), TOKEN_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn valid() -> CmsConfig {
        CmsConfig {
            host: "https://localhost:44331".into(),
            client_id: "umbraco-back-office-builder".into(),
            client_secret: "secret".into(),
        }
    }

    #[test]
    fn test_from_file_parses_all_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmskit.toml");
        fs::write(
            &path,
            r#"
host = "https://localhost:44331/"
client_id = "umbraco-back-office-builder"
client_secret = "secret"
"#,
        )
        .unwrap();

        let config = CmsConfig::from_file(&path).unwrap();
        assert_eq!(config.host, "https://localhost:44331/");
        assert_eq!(config.client_id, "umbraco-back-office-builder");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let err = CmsConfig::load(Some(Path::new("/does/not/exist.toml"))).unwrap_err();
        assert!(matches!(err, CmskitError::Config { .. }));
    }

    #[test]
    fn test_validate_rejects_missing_credentials() {
        let config = CmsConfig { client_secret: String::new(), ..valid() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CmskitError::Config { message } if message.contains("credentials")));
    }

    #[test]
    fn test_validate_rejects_non_http_host() {
        let config = CmsConfig { host: "localhost:44331".into(), ..valid() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_url_normalizes_trailing_slash() {
        let config = CmsConfig { host: "https://localhost:44331/".into(), ..valid() };
        assert_eq!(
            config.token_url(),
            "https://localhost:44331/umbraco/management/api/v1/security/back-office/token"
        );
    }

    #[test]
    fn test_malformed_toml_is_a_toml_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmskit.toml");
        fs::write(&path, "host = [not toml").unwrap();
        let err = CmsConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CmskitError::Toml(_)));
    }
}
