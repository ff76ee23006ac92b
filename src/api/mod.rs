//! Management API transport.
//!
//! [`ManagementClient`] is a thin `reqwest` wrapper around the remote
//! management API: the paginated tree-listing endpoints and the create,
//! update, and publish endpoints the provisioning builders drive. Every
//! request carries a bearer token obtained from the shared
//! [`TokenCache`](crate::auth::TokenCache), so token refresh is transparent
//! to callers.
//!
//! The [`TokenSource`] and [`TreeApi`] traits are the seams the rest of the
//! crate depends on; unit tests substitute in-memory stubs for them instead
//! of a live server.

pub mod models;

use std::future::Future;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::auth::{ClientCredentialsSource, TokenCache};
use crate::config::CmsConfig;
use crate::constants::MANAGEMENT_API_BASE;
use crate::core::{CmskitError, Result};
use models::{
    CreateDictionaryItemRequest, CreateDocumentRequest, CreateDocumentTypeRequest,
    CreateFolderRequest, CreateMediaRequest, CreateTemplateRequest, DataTypeRequest,
    MediaTreeItem, Paged, PublishWithDescendantsRequest, TokenGrant, TreeItem,
    UpdateDocumentRequest,
};

/// Provider of fresh bearer credentials.
///
/// Production code uses [`ClientCredentialsSource`]; tests use counting stubs
/// to observe how often the cache actually hits the endpoint.
pub trait TokenSource: Send + Sync {
    /// Perform one token request against the remote endpoint.
    fn request_token(&self) -> impl Future<Output = Result<TokenGrant>> + Send;
}

/// The tree-listing surface the identifier resolver consumes.
///
/// All listings are paginated with `skip`/`take` and return `{items, total}`.
pub trait TreeApi: Send + Sync {
    fn data_type_tree_root(
        &self,
        skip: usize,
        take: usize,
    ) -> impl Future<Output = Result<Paged<TreeItem>>> + Send;

    fn media_type_tree_root(
        &self,
        skip: usize,
        take: usize,
    ) -> impl Future<Output = Result<Paged<TreeItem>>> + Send;

    fn document_type_tree_root(
        &self,
        skip: usize,
        take: usize,
        folders_only: bool,
    ) -> impl Future<Output = Result<Paged<TreeItem>>> + Send;

    fn document_type_tree_children(
        &self,
        parent: Uuid,
        skip: usize,
        take: usize,
        folders_only: bool,
    ) -> impl Future<Output = Result<Paged<TreeItem>>> + Send;

    fn media_tree_root(
        &self,
        skip: usize,
        take: usize,
    ) -> impl Future<Output = Result<Paged<MediaTreeItem>>> + Send;

    fn media_tree_children(
        &self,
        parent: Uuid,
        skip: usize,
        take: usize,
    ) -> impl Future<Output = Result<Paged<MediaTreeItem>>> + Send;

    fn template_tree_root(
        &self,
        skip: usize,
        take: usize,
    ) -> impl Future<Output = Result<Paged<TreeItem>>> + Send;

    fn template_tree_children(
        &self,
        parent: Uuid,
        skip: usize,
        take: usize,
    ) -> impl Future<Output = Result<Paged<TreeItem>>> + Send;
}

/// Authenticated client for the management API.
///
/// Cheap to clone: the underlying HTTP connection pool and the token cache
/// are shared across clones, so every builder sees the same credential.
#[derive(Clone)]
pub struct ManagementClient {
    http: reqwest::Client,
    host: String,
    tokens: Arc<TokenCache<ClientCredentialsSource>>,
}

impl ManagementClient {
    /// Build a client for the configured host.
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let source = ClientCredentialsSource::new(
            http.clone(),
            config.token_url(),
            config.client_id.clone(),
            config.client_secret.clone(),
        );
        Ok(Self {
            http,
            host: config.host.trim_end_matches('/').to_string(),
            tokens: Arc::new(TokenCache::new(source)),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.host, MANAGEMENT_API_BASE, path)
    }

    async fn bearer(&self) -> Result<String> {
        self.tokens.get_token().await
    }

    async fn expect_success(
        response: reqwest::Response,
        method: &'static str,
        path: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(CmskitError::Api { method, path: path.to_string(), status: status.as_u16(), body })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;
        Ok(Self::expect_success(response, "GET", path).await?.json().await?)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        debug!(path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.bearer().await?)
            .json(body)
            .send()
            .await?;
        Self::expect_success(response, "POST", path).await?;
        Ok(())
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        debug!(path, "PUT");
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(self.bearer().await?)
            .json(body)
            .send()
            .await?;
        Self::expect_success(response, "PUT", path).await?;
        Ok(())
    }

    fn paging(skip: usize, take: usize) -> Vec<(&'static str, String)> {
        vec![("skip", skip.to_string()), ("take", take.to_string())]
    }

    /// List root documents; used to locate the site root after creation.
    pub async fn document_tree_root(&self, skip: usize, take: usize) -> Result<Paged<TreeItem>> {
        self.get_json("/tree/document/root", &Self::paging(skip, take)).await
    }

    pub async fn post_dictionary_item(&self, request: &CreateDictionaryItemRequest) -> Result<()> {
        self.post_json("/dictionary", request).await
    }

    pub async fn post_template(&self, request: &CreateTemplateRequest) -> Result<()> {
        self.post_json("/template", request).await
    }

    pub async fn post_data_type(&self, request: &DataTypeRequest) -> Result<()> {
        self.post_json("/data-type", request).await
    }

    pub async fn put_data_type(&self, id: Uuid, request: &DataTypeRequest) -> Result<()> {
        self.put_json(&format!("/data-type/{id}"), request).await
    }

    pub async fn post_document_type(&self, request: &CreateDocumentTypeRequest) -> Result<()> {
        self.post_json("/document-type", request).await
    }

    pub async fn post_document_type_folder(&self, request: &CreateFolderRequest) -> Result<()> {
        self.post_json("/document-type/folder", request).await
    }

    pub async fn post_document(&self, request: &CreateDocumentRequest) -> Result<()> {
        self.post_json("/document", request).await
    }

    pub async fn put_document(&self, id: Uuid, request: &UpdateDocumentRequest) -> Result<()> {
        self.put_json(&format!("/document/{id}"), request).await
    }

    pub async fn put_document_publish_with_descendants(
        &self,
        id: Uuid,
        include_unpublished_descendants: bool,
    ) -> Result<()> {
        self.put_json(
            &format!("/document/{id}/publish-with-descendants"),
            &PublishWithDescendantsRequest { include_unpublished_descendants },
        )
        .await
    }

    pub async fn post_media(&self, request: &CreateMediaRequest) -> Result<()> {
        self.post_json("/media", request).await
    }

    /// Upload file bytes as a temporary file that a subsequent media create
    /// request can reference by id.
    pub async fn post_temporary_file(
        &self,
        id: Uuid,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let path = "/temporary-file";
        debug!(path, file_name, "POST (multipart)");
        let form = Form::new()
            .text("Id", id.to_string())
            .part("File", Part::bytes(bytes).file_name(file_name.to_string()));
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.bearer().await?)
            .multipart(form)
            .send()
            .await?;
        Self::expect_success(response, "POST", path).await?;
        Ok(())
    }
}

impl TreeApi for ManagementClient {
    async fn data_type_tree_root(&self, skip: usize, take: usize) -> Result<Paged<TreeItem>> {
        self.get_json("/tree/data-type/root", &Self::paging(skip, take)).await
    }

    async fn media_type_tree_root(&self, skip: usize, take: usize) -> Result<Paged<TreeItem>> {
        self.get_json("/tree/media-type/root", &Self::paging(skip, take)).await
    }

    async fn document_type_tree_root(
        &self,
        skip: usize,
        take: usize,
        folders_only: bool,
    ) -> Result<Paged<TreeItem>> {
        let mut query = Self::paging(skip, take);
        query.push(("foldersOnly", folders_only.to_string()));
        self.get_json("/tree/document-type/root", &query).await
    }

    async fn document_type_tree_children(
        &self,
        parent: Uuid,
        skip: usize,
        take: usize,
        folders_only: bool,
    ) -> Result<Paged<TreeItem>> {
        let mut query = Self::paging(skip, take);
        query.push(("parentId", parent.to_string()));
        query.push(("foldersOnly", folders_only.to_string()));
        self.get_json("/tree/document-type/children", &query).await
    }

    async fn media_tree_root(&self, skip: usize, take: usize) -> Result<Paged<MediaTreeItem>> {
        self.get_json("/tree/media/root", &Self::paging(skip, take)).await
    }

    async fn media_tree_children(
        &self,
        parent: Uuid,
        skip: usize,
        take: usize,
    ) -> Result<Paged<MediaTreeItem>> {
        let mut query = Self::paging(skip, take);
        query.push(("parentId", parent.to_string()));
        self.get_json("/tree/media/children", &query).await
    }

    async fn template_tree_root(&self, skip: usize, take: usize) -> Result<Paged<TreeItem>> {
        self.get_json("/tree/template/root", &Self::paging(skip, take)).await
    }

    async fn template_tree_children(
        &self,
        parent: Uuid,
        skip: usize,
        take: usize,
    ) -> Result<Paged<TreeItem>> {
        let mut query = Self::paging(skip, take);
        query.push(("parentId", parent.to_string()));
        self.get_json("/tree/template/children", &query).await
    }
}
