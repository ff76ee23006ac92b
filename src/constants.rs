//! Global constants used throughout the cmskit codebase.
//!
//! This module contains timeout margins, pagination sizes, and endpoint
//! paths that are used across multiple modules. Defining them centrally
//! improves maintainability and makes magic numbers more discoverable.

use std::time::Duration;

/// Safety margin subtracted from a token's declared lifetime (20 seconds).
///
/// A token that the endpoint reports as valid for N seconds is treated as
/// expired after N - 20 seconds, so a request carrying it never races the
/// remote side's own expiry check mid-flight.
pub const TOKEN_SAFETY_MARGIN: Duration = Duration::from_secs(20);

/// Page size for paginated tree-listing calls (`take` parameter).
pub const LISTING_PAGE_SIZE: usize = 100;

/// Base path of the management API, relative to the configured host.
pub const MANAGEMENT_API_BASE: &str = "/umbraco/management/api/v1";

/// Token endpoint path for the back-office client-credentials grant.
pub const TOKEN_ENDPOINT: &str = "/umbraco/management/api/v1/security/back-office/token";

/// ISO code used for dictionary item translations.
pub const DEFAULT_ISO_CODE: &str = "en-US";

/// Name of the master template that page templates nest under.
pub const MASTER_TEMPLATE: &str = "Master";

/// Name of the sitemap template required alongside the master at root.
pub const XML_SITEMAP_TEMPLATE: &str = "XMLSitemap";
