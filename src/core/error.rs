//! Error handling for cmskit
//!
//! This module provides the error types and user-facing error reporting for
//! the provisioning tool. The error system is designed around two principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`CmskitError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! All errors are fatal to the provisioning phase that raised them: there is
//! no internal retry and no partial-success continuation. The operator fixes
//! the remote data (or the configuration) and reruns the pass.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for cmskit operations.
///
/// Every variant carries the resource category and/or name that failed, so an
/// operator can correct the remote system's data and rerun the provisioning
/// pass.
#[derive(Error, Debug)]
pub enum CmskitError {
    /// The token endpoint reported an error or returned no token.
    ///
    /// The cached credential is left untouched; callers that want to retry
    /// must do so at a higher level.
    #[error("Could not obtain an access token: {reason}")]
    Auth {
        /// Description of the token endpoint failure
        reason: String,
    },

    /// Populating a category's name index failed.
    ///
    /// This occurs when a listing call fails or returns no items at all, and
    /// is fatal to the builder that triggered the population.
    #[error("Could not fetch {category}: {reason}")]
    Fetch {
        /// The resource category being populated (e.g. "data types")
        category: &'static str,
        /// The reason the population could not complete
        reason: String,
    },

    /// A name was absent from a populated name index.
    #[error("The {category} did not exist: {name}")]
    NotFound {
        /// The resource category that was searched
        category: &'static str,
        /// The name that could not be resolved
        name: String,
    },

    /// A resolver precondition was not met.
    ///
    /// For example, the master and sitemap templates must exist at the root
    /// of the template tree before page templates can be resolved.
    #[error("Validation failed: {reason}")]
    Validation {
        /// Description of the unmet precondition
        reason: String,
    },

    /// The management API returned a non-success status code.
    #[error("Management API request failed: {method} {path} returned {status}")]
    Api {
        /// HTTP method of the failed request
        method: &'static str,
        /// Request path relative to the host
        path: String,
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// An asset file (template view, media file) was not found on disk.
    #[error("Could not find the file on disk: {path}")]
    AssetNotFound {
        /// The path that was expected to exist
        path: String,
    },

    /// HTTP transport error from the underlying client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error from configuration files.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CmskitError>;

/// Wrapper that pairs an error with user-facing guidance.
///
/// Suggestions are actionable steps displayed in green; details provide
/// additional context displayed in yellow.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error message
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), suggestion: None, details: None }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`] for CLI display.
///
/// Known [`CmskitError`] variants get tailored suggestions; everything else
/// falls back to the plain error chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(err) = error.downcast_ref::<CmskitError>() {
        return contextualize(err);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>()
        && io_error.kind() == std::io::ErrorKind::NotFound
    {
        return ErrorContext::new(format!("{error:#}"))
            .with_suggestion("Check that the file or directory exists and the path is correct");
    }

    ErrorContext::new(format!("{error:#}"))
}

fn contextualize(error: &CmskitError) -> ErrorContext {
    let ctx = ErrorContext::new(error.to_string());
    match error {
        CmskitError::Auth { .. } => ctx
            .with_suggestion(
                "Check the client id and client secret in cmskit.toml against the \
                 API user configured in the CMS back office",
            )
            .with_details("The token endpoint rejected the client-credentials grant"),
        CmskitError::NotFound { category, .. } => ctx.with_suggestion(format!(
            "Create the missing {category} in the CMS (or fix its name) and rerun the pass"
        )),
        CmskitError::Fetch { .. } => {
            ctx.with_suggestion("Verify the host URL and that the management API is reachable")
        }
        CmskitError::Validation { .. } => ctx.with_suggestion(
            "Run the earlier provisioning phases first so the required items exist",
        ),
        CmskitError::Api { status, .. } if *status == 401 || *status == 403 => {
            ctx.with_suggestion("Ensure the API user has access to the section being provisioned")
        }
        CmskitError::Config { .. } => ctx.with_suggestion(
            "Provide host, client_id and client_secret via cmskit.toml or CMSKIT_* \
             environment variables",
        ),
        _ => ctx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mentions_category_and_name() {
        let err = CmskitError::NotFound { category: "data type", name: "Textstring".into() };
        assert_eq!(err.to_string(), "The data type did not exist: Textstring");
    }

    #[test]
    fn test_fetch_mentions_category() {
        let err =
            CmskitError::Fetch { category: "media types", reason: "no items returned".into() };
        assert!(err.to_string().contains("media types"));
        assert!(err.to_string().contains("no items returned"));
    }

    #[test]
    fn test_error_context_display_format() {
        let ctx =
            ErrorContext::new("boom").with_details("it exploded").with_suggestion("stand back");
        let rendered = ctx.to_string();
        assert!(rendered.contains("boom"));
        assert!(rendered.contains("Details: it exploded"));
        assert!(rendered.contains("Suggestion: stand back"));
    }

    #[test]
    fn test_user_friendly_error_auth_suggestion() {
        let ctx = user_friendly_error(anyhow::Error::from(CmskitError::Auth {
            reason: "invalid_client".into(),
        }));
        assert!(ctx.suggestion.unwrap().contains("client id"));
    }
}
