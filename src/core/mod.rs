//! Core types and functionality for cmskit
//!
//! This module forms the foundation of the tool's type system: the error
//! taxonomy, the crate-wide [`Result`] alias, and the user-facing error
//! presentation used by the CLI entry point.
//!
//! # Error Management
//!
//! - **Strongly-typed errors** ([`CmskitError`]) for precise handling in code
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions
//! - **Automatic conversion** from common transport and parsing errors

pub mod error;

pub use error::{CmskitError, ErrorContext, Result, user_friendly_error};
