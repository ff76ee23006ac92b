//! Integration tests for cmskit.
//!
//! The CLI tests run the compiled binary and only exercise paths that need
//! no live deployment: argument validation, configuration loading, and the
//! local asset checks. The payload tests drive the public library API the
//! way the provisioning builders do.

mod block_payloads;
mod cli_smoke;
