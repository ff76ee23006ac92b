//! Access-token cache for the management API.
//!
//! Every outbound call is authenticated with a bearer token obtained through
//! the back-office client-credentials grant. Tokens are valid for a limited
//! time, so [`TokenCache`] keeps the current credential and refreshes it
//! transparently when it nears expiry. The cache is shared by every
//! concurrently-executing builder; the double-checked locking in
//! [`TokenCache::get_token`] guarantees at most one token request per expiry
//! cycle no matter how many callers race for a credential.

use std::collections::HashMap;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::debug;

use crate::api::TokenSource;
use crate::api::models::TokenGrant;
use crate::constants::TOKEN_SAFETY_MARGIN;
use crate::core::{CmskitError, Result};

/// A bearer token together with its adjusted expiry.
///
/// Owned exclusively by the cache, never persisted, and replaced wholesale
/// on refresh.
#[derive(Debug, Clone)]
struct Credential {
    token: String,
    expires_at: Instant,
}

impl Credential {
    /// The declared lifetime is shortened by [`TOKEN_SAFETY_MARGIN`] so a
    /// token never expires on the remote side mid-request.
    fn from_grant(grant: TokenGrant) -> Self {
        let usable = grant.expires_in.saturating_sub(TOKEN_SAFETY_MARGIN.as_secs());
        Self {
            token: grant.access_token,
            expires_at: Instant::now() + std::time::Duration::from_secs(usable),
        }
    }

    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Process-wide cache of the current bearer credential.
///
/// `S` is the [`TokenSource`] that performs the actual token request;
/// production uses [`ClientCredentialsSource`].
pub struct TokenCache<S> {
    source: S,
    credential: RwLock<Option<Credential>>,
}

impl<S: TokenSource> TokenCache<S> {
    pub fn new(source: S) -> Self {
        Self { source, credential: RwLock::new(None) }
    }

    /// Return a valid bearer token, fetching a new one only when necessary.
    ///
    /// Fast path: a shared read of the cached credential. Slow path: take
    /// the exclusive lock, re-check (another caller may have refreshed the
    /// credential while this one waited), and only then hit the endpoint.
    /// A failed request leaves the cached state untouched and surfaces the
    /// error to the caller; no retry is performed here.
    pub async fn get_token(&self) -> Result<String> {
        if let Some(credential) = self.credential.read().await.as_ref()
            && credential.is_valid()
        {
            return Ok(credential.token.clone());
        }

        let mut guard = self.credential.write().await;
        if let Some(credential) = guard.as_ref()
            && credential.is_valid()
        {
            // another caller fetched a new token before this one entered
            // the exclusive scope, reuse it.
            return Ok(credential.token.clone());
        }

        debug!("access token missing or expired, requesting a new one");
        let grant = self.source.request_token().await?;
        let credential = Credential::from_grant(grant);
        let token = credential.token.clone();
        *guard = Some(credential);
        Ok(token)
    }
}

/// [`TokenSource`] backed by the back-office token endpoint.
pub struct ClientCredentialsSource {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl ClientCredentialsSource {
    pub fn new(
        http: reqwest::Client,
        token_url: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        Self { http, token_url, client_id, client_secret }
    }
}

impl TokenSource for ClientCredentialsSource {
    async fn request_token(&self) -> Result<TokenGrant> {
        let mut form = HashMap::new();
        form.insert("grant_type", "client_credentials");
        form.insert("client_id", self.client_id.as_str());
        form.insert("client_secret", self.client_secret.as_str());

        let response = self.http.post(&self.token_url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error_description")
                        .or_else(|| v.get("error"))
                        .and_then(|d| d.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("token endpoint returned {status}"));
            return Err(CmskitError::Auth { reason });
        }

        let grant: TokenGrant = response.json().await.map_err(|err| CmskitError::Auth {
            reason: format!("token endpoint returned an unusable response: {err}"),
        })?;
        if grant.access_token.is_empty() {
            return Err(CmskitError::Auth { reason: "token endpoint returned no token".into() });
        }
        Ok(grant)
    }
}
