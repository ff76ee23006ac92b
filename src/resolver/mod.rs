//! Identifier resolution with per-category name caches.
//!
//! The management API addresses everything by opaque identifier, while the
//! provisioning catalog speaks in human-readable names. [`IdentifierResolver`]
//! translates between the two: on first use of a category it issues the
//! paginated listing calls needed to build that category's [`NameIndex`], and
//! every later lookup is served from the cache with no network access.
//!
//! Categories and their population strategies:
//! - **data types / media types**: one flat root listing each.
//! - **document types**: scoped by folder path; the resolver walks the
//!   document-type tree one level per path segment, then indexes the final
//!   level's non-folder children.
//! - **media**: scoped by a single folder name under the media root.
//! - **templates**: root templates plus the master template's children,
//!   merged into one flat index. The master and sitemap templates must exist
//!   at root or resolution fails.
//!
//! Population is explicitly synchronized: flat categories use a
//! populate-once cell and folder-scoped categories serialize behind a mutex,
//! so two builders racing on an unpopulated category still produce exactly
//! one listing sequence. Failed populations are not cached; an independent
//! builder may trigger a fresh attempt.
//!
//! The tool assumes no concurrent external mutation of the remote system
//! during a run, so populated indexes are immutable for the process lifetime.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::Either;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;
use uuid::Uuid;

use crate::api::TreeApi;
use crate::api::models::Paged;
use crate::constants::{LISTING_PAGE_SIZE, MASTER_TEMPLATE, XML_SITEMAP_TEMPLATE};
use crate::core::{CmskitError, Result};

/// Immutable mapping from human-readable name to remote identifier for one
/// resource category.
#[derive(Debug, Clone)]
pub struct NameIndex {
    category: &'static str,
    ids: HashMap<String, Uuid>,
}

impl NameIndex {
    fn new(category: &'static str, ids: HashMap<String, Uuid>) -> Self {
        Self { category, ids }
    }

    /// Look up a name, failing with the category and name that were missing.
    pub fn get(&self, name: &str) -> Result<Uuid> {
        self.ids.get(name).copied().ok_or_else(|| CmskitError::NotFound {
            category: self.category,
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Collect every page of a listing into one vector.
async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Paged<T>>>,
{
    let mut items: Vec<T> = Vec::new();
    loop {
        let page = fetch(items.len()).await?;
        let total = page.total;
        if page.items.is_empty() {
            break;
        }
        items.extend(page.items);
        if items.len() >= total {
            break;
        }
    }
    Ok(items)
}

/// Lazily-populated name→id caches over a [`TreeApi`].
pub struct IdentifierResolver<A> {
    api: A,
    data_types: OnceCell<NameIndex>,
    media_types: OnceCell<NameIndex>,
    templates: OnceCell<NameIndex>,
    document_types: Mutex<HashMap<Vec<String>, Arc<NameIndex>>>,
    media_folders: Mutex<HashMap<String, Arc<NameIndex>>>,
}

impl<A: TreeApi> IdentifierResolver<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            data_types: OnceCell::new(),
            media_types: OnceCell::new(),
            templates: OnceCell::new(),
            document_types: Mutex::new(HashMap::new()),
            media_folders: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a data type by name.
    pub async fn data_type_id(&self, name: &str) -> Result<Uuid> {
        let index = self
            .data_types
            .get_or_try_init(|| async {
                debug!("populating data type index");
                let items =
                    collect_pages(|skip| self.api.data_type_tree_root(skip, LISTING_PAGE_SIZE))
                        .await?;
                if items.is_empty() {
                    return Err(CmskitError::Fetch {
                        category: "data types",
                        reason: "the listing returned no items".into(),
                    });
                }
                Ok(NameIndex::new(
                    "data type",
                    items.into_iter().map(|item| (item.name, item.id)).collect(),
                ))
            })
            .await?;
        index.get(name)
    }

    /// Resolve a media type by name.
    pub async fn media_type_id(&self, name: &str) -> Result<Uuid> {
        let index = self
            .media_types
            .get_or_try_init(|| async {
                debug!("populating media type index");
                let items =
                    collect_pages(|skip| self.api.media_type_tree_root(skip, LISTING_PAGE_SIZE))
                        .await?;
                if items.is_empty() {
                    return Err(CmskitError::Fetch {
                        category: "media types",
                        reason: "the listing returned no items".into(),
                    });
                }
                Ok(NameIndex::new(
                    "media type",
                    items.into_iter().map(|item| (item.name, item.id)).collect(),
                ))
            })
            .await?;
        index.get(name)
    }

    /// Resolve the index of document types in the folder located by
    /// `folder_path`, walking the tree one level per segment. An empty path
    /// indexes the non-folder items at the tree root.
    pub async fn document_type_ids(&self, folder_path: &[&str]) -> Result<Arc<NameIndex>> {
        let key: Vec<String> = folder_path.iter().map(|s| (*s).to_string()).collect();
        let mut cache = self.document_types.lock().await;
        if let Some(index) = cache.get(&key) {
            return Ok(Arc::clone(index));
        }

        debug!(path = %folder_path.join("/"), "populating document type index");
        let index = Arc::new(self.walk_document_types(folder_path).await?);
        cache.insert(key, Arc::clone(&index));
        Ok(index)
    }

    /// Resolve a single document type by folder path and name.
    pub async fn document_type_id(&self, folder_path: &[&str], name: &str) -> Result<Uuid> {
        self.document_type_ids(folder_path).await?.get(name)
    }

    async fn document_type_level(
        &self,
        parent: Option<Uuid>,
        folders_only: bool,
    ) -> Result<Vec<crate::api::models::TreeItem>> {
        collect_pages(|skip| match parent {
            Some(id) => Either::Left(self.api.document_type_tree_children(
                id,
                skip,
                LISTING_PAGE_SIZE,
                folders_only,
            )),
            None => Either::Right(self.api.document_type_tree_root(
                skip,
                LISTING_PAGE_SIZE,
                folders_only,
            )),
        })
        .await
    }

    async fn walk_document_types(&self, folder_path: &[&str]) -> Result<NameIndex> {
        let mut parent: Option<Uuid> = None;
        for segment in folder_path {
            let candidates = self.document_type_level(parent, true).await?;
            let folder = candidates
                .iter()
                .find(|item| item.is_folder && item.name == *segment)
                .ok_or_else(|| CmskitError::NotFound {
                    category: "document type folder",
                    name: (*segment).to_string(),
                })?;
            parent = Some(folder.id);
        }

        let items = self.document_type_level(parent, false).await?;
        let ids: HashMap<String, Uuid> = items
            .into_iter()
            .filter(|item| !item.is_folder)
            .map(|item| (item.name, item.id))
            .collect();
        if ids.is_empty() {
            return Err(CmskitError::Fetch {
                category: "document types",
                reason: format!("no document types found for path: {}", folder_path.join("/")),
            });
        }
        Ok(NameIndex::new("document type", ids))
    }

    /// Resolve the index of media items inside the named root-level folder.
    pub async fn media_ids(&self, folder: &str) -> Result<Arc<NameIndex>> {
        let mut cache = self.media_folders.lock().await;
        if let Some(index) = cache.get(folder) {
            return Ok(Arc::clone(index));
        }

        debug!(folder, "populating media index");
        let roots = collect_pages(|skip| self.api.media_tree_root(skip, LISTING_PAGE_SIZE)).await?;
        let folder_item = roots
            .iter()
            .find(|item| item.variants.first().is_some_and(|v| v.name == folder))
            .ok_or_else(|| CmskitError::NotFound {
                category: "media folder",
                name: folder.to_string(),
            })?;

        let children = collect_pages(|skip| {
            self.api.media_tree_children(folder_item.id, skip, LISTING_PAGE_SIZE)
        })
        .await?;
        let ids: HashMap<String, Uuid> = children
            .into_iter()
            .filter_map(|item| item.variants.into_iter().next().map(|v| (v.name, item.id)))
            .collect();
        if ids.is_empty() {
            return Err(CmskitError::Fetch {
                category: "media",
                reason: format!("no media found in folder: {folder}"),
            });
        }

        let index = Arc::new(NameIndex::new("media item", ids));
        cache.insert(folder.to_string(), Arc::clone(&index));
        Ok(index)
    }

    /// Resolve a media item by folder name and item name.
    pub async fn media_id(&self, folder: &str, name: &str) -> Result<Uuid> {
        self.media_ids(folder).await?.get(name)
    }

    /// Resolve a template by name.
    ///
    /// The index holds the root templates plus the master template's
    /// children; the master and the sitemap template are required to be
    /// present at root or population fails.
    pub async fn template_id(&self, name: &str) -> Result<Uuid> {
        let index = self
            .templates
            .get_or_try_init(|| async {
                debug!("populating template index");
                let roots =
                    collect_pages(|skip| self.api.template_tree_root(skip, LISTING_PAGE_SIZE))
                        .await?;
                let root_ids: HashMap<String, Uuid> =
                    roots.into_iter().map(|item| (item.name, item.id)).collect();

                let (Some(&master_id), Some(&sitemap_id)) =
                    (root_ids.get(MASTER_TEMPLATE), root_ids.get(XML_SITEMAP_TEMPLATE))
                else {
                    return Err(CmskitError::Validation {
                        reason: "could not find the required templates at root level".into(),
                    });
                };

                let children = collect_pages(|skip| {
                    self.api.template_tree_children(master_id, skip, LISTING_PAGE_SIZE)
                })
                .await?;
                let mut ids: HashMap<String, Uuid> =
                    children.into_iter().map(|item| (item.name, item.id)).collect();
                ids.insert(MASTER_TEMPLATE.to_string(), master_id);
                ids.insert(XML_SITEMAP_TEMPLATE.to_string(), sitemap_id);
                Ok(NameIndex::new("template", ids))
            })
            .await?;
        index.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{MediaTreeItem, TreeItem, VariantModel};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn node(name: &str) -> TreeItem {
        TreeItem { id: Uuid::new_v4(), name: name.to_string(), is_folder: false }
    }

    fn folder(name: &str) -> TreeItem {
        TreeItem { id: Uuid::new_v4(), name: name.to_string(), is_folder: true }
    }

    fn media(name: &str) -> MediaTreeItem {
        MediaTreeItem { id: Uuid::new_v4(), variants: vec![VariantModel::named(name)] }
    }

    fn page<T: Clone>(items: &[T], skip: usize, take: usize) -> Paged<T> {
        let total = items.len();
        let end = (skip + take).min(total);
        let items = if skip >= total { Vec::new() } else { items[skip..end].to_vec() };
        Paged { items, total }
    }

    #[derive(Default)]
    struct StubTreeApi {
        data_types: Vec<TreeItem>,
        media_types: Vec<TreeItem>,
        doc_root: Vec<TreeItem>,
        doc_children: HashMap<Uuid, Vec<TreeItem>>,
        media_root: Vec<MediaTreeItem>,
        media_children: HashMap<Uuid, Vec<MediaTreeItem>>,
        template_root: Vec<TreeItem>,
        template_children: HashMap<Uuid, Vec<TreeItem>>,
        listing_calls: AtomicUsize,
        fail_next: AtomicBool,
    }

    impl StubTreeApi {
        fn listing_call_count(&self) -> usize {
            self.listing_calls.load(Ordering::SeqCst)
        }

        fn record(&self) -> Result<()> {
            self.listing_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_next.swap(false, Ordering::SeqCst) {
                return Err(CmskitError::Fetch {
                    category: "data types",
                    reason: "connection reset".into(),
                });
            }
            Ok(())
        }

        fn doc_level(&self, parent: Option<Uuid>, folders_only: bool) -> Vec<TreeItem> {
            let items = match parent {
                Some(id) => self.doc_children.get(&id).cloned().unwrap_or_default(),
                None => self.doc_root.clone(),
            };
            if folders_only {
                items.into_iter().filter(|item| item.is_folder).collect()
            } else {
                items
            }
        }
    }

    impl TreeApi for StubTreeApi {
        async fn data_type_tree_root(&self, skip: usize, take: usize) -> Result<Paged<TreeItem>> {
            self.record()?;
            Ok(page(&self.data_types, skip, take))
        }

        async fn media_type_tree_root(&self, skip: usize, take: usize) -> Result<Paged<TreeItem>> {
            self.record()?;
            Ok(page(&self.media_types, skip, take))
        }

        async fn document_type_tree_root(
            &self,
            skip: usize,
            take: usize,
            folders_only: bool,
        ) -> Result<Paged<TreeItem>> {
            self.record()?;
            Ok(page(&self.doc_level(None, folders_only), skip, take))
        }

        async fn document_type_tree_children(
            &self,
            parent: Uuid,
            skip: usize,
            take: usize,
            folders_only: bool,
        ) -> Result<Paged<TreeItem>> {
            self.record()?;
            Ok(page(&self.doc_level(Some(parent), folders_only), skip, take))
        }

        async fn media_tree_root(&self, skip: usize, take: usize) -> Result<Paged<MediaTreeItem>> {
            self.record()?;
            Ok(page(&self.media_root, skip, take))
        }

        async fn media_tree_children(
            &self,
            parent: Uuid,
            skip: usize,
            take: usize,
        ) -> Result<Paged<MediaTreeItem>> {
            self.record()?;
            Ok(page(&self.media_children.get(&parent).cloned().unwrap_or_default(), skip, take))
        }

        async fn template_tree_root(&self, skip: usize, take: usize) -> Result<Paged<TreeItem>> {
            self.record()?;
            Ok(page(&self.template_root, skip, take))
        }

        async fn template_tree_children(
            &self,
            parent: Uuid,
            skip: usize,
            take: usize,
        ) -> Result<Paged<TreeItem>> {
            self.record()?;
            Ok(page(&self.template_children.get(&parent).cloned().unwrap_or_default(), skip, take))
        }
    }

    #[tokio::test]
    async fn test_flat_category_populates_once() {
        let resolver = IdentifierResolver::new(StubTreeApi {
            data_types: vec![node("Textstring"), node("Textarea")],
            ..Default::default()
        });

        let first = resolver.data_type_id("Textstring").await.unwrap();
        let second = resolver.data_type_id("Textstring").await.unwrap();
        resolver.data_type_id("Textarea").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(resolver.api.listing_call_count(), 1);
    }

    #[tokio::test]
    async fn test_flat_category_paginates_past_one_page() {
        let data_types: Vec<TreeItem> = (0..150).map(|i| node(&format!("dt-{i}"))).collect();
        let resolver = IdentifierResolver::new(StubTreeApi { data_types, ..Default::default() });

        resolver.data_type_id("dt-149").await.unwrap();
        assert_eq!(resolver.api.listing_call_count(), 2);
    }

    #[tokio::test]
    async fn test_absent_name_is_not_found() {
        let resolver = IdentifierResolver::new(StubTreeApi {
            data_types: vec![node("Textstring")],
            ..Default::default()
        });

        let err = resolver.data_type_id("Missing").await.unwrap_err();
        assert!(matches!(err, CmskitError::NotFound { name, .. } if name == "Missing"));
    }

    #[tokio::test]
    async fn test_failed_population_is_not_cached() {
        let stub = StubTreeApi { data_types: vec![node("Textstring")], ..Default::default() };
        stub.fail_next.store(true, Ordering::SeqCst);
        let resolver = IdentifierResolver::new(stub);

        let err = resolver.data_type_id("Textstring").await.unwrap_err();
        assert!(matches!(err, CmskitError::Fetch { .. }));

        // the cell stays unset, so the next resolve repopulates and succeeds
        resolver.data_type_id("Textstring").await.unwrap();
        assert_eq!(resolver.api.listing_call_count(), 2);
    }

    #[tokio::test]
    async fn test_folder_path_walk_resolves_nested_types() {
        let a = folder("A");
        let b = folder("B");
        let rich_text = node("Rich Text Row");
        let mut doc_children = HashMap::new();
        doc_children.insert(a.id, vec![b.clone(), node("Stray")]);
        doc_children.insert(b.id, vec![rich_text.clone(), folder("Nested")]);

        let resolver = IdentifierResolver::new(StubTreeApi {
            doc_root: vec![a.clone(), node("Top Level")],
            doc_children,
            ..Default::default()
        });

        let id = resolver.document_type_id(&["A", "B"], "Rich Text Row").await.unwrap();
        assert_eq!(id, rich_text.id);
        // one listing for root, one for A's children, one for B's children
        assert_eq!(resolver.api.listing_call_count(), 3);

        // second path resolution is a pure cache hit
        resolver.document_type_id(&["A", "B"], "Rich Text Row").await.unwrap();
        assert_eq!(resolver.api.listing_call_count(), 3);
    }

    #[tokio::test]
    async fn test_missing_path_segment_names_the_segment() {
        let a = folder("A");
        let mut doc_children = HashMap::new();
        doc_children.insert(a.id, vec![node("Not A Folder")]);

        let resolver = IdentifierResolver::new(StubTreeApi {
            doc_root: vec![a],
            doc_children,
            ..Default::default()
        });

        let err = resolver.document_type_ids(&["A", "B"]).await.unwrap_err();
        assert!(matches!(err, CmskitError::NotFound { name, .. } if name == "B"));
    }

    #[tokio::test]
    async fn test_final_level_excludes_folders() {
        let a = folder("A");
        let mut doc_children = HashMap::new();
        doc_children.insert(a.id, vec![node("Article"), folder("Subfolder")]);

        let resolver = IdentifierResolver::new(StubTreeApi {
            doc_root: vec![a],
            doc_children,
            ..Default::default()
        });

        let index = resolver.document_type_ids(&["A"]).await.unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.get("Subfolder").is_err());
    }

    #[tokio::test]
    async fn test_media_folder_scoping() {
        let icons = media("Social Icons");
        let github = media("Github");
        let github_id = github.id;
        let mut media_children = HashMap::new();
        media_children.insert(icons.id, vec![github, media("Discord")]);

        let resolver = IdentifierResolver::new(StubTreeApi {
            media_root: vec![icons, media("Sample Images")],
            media_children,
            ..Default::default()
        });

        assert_eq!(resolver.media_id("Social Icons", "Github").await.unwrap(), github_id);
        let err = resolver.media_ids("Nope").await.unwrap_err();
        assert!(matches!(err, CmskitError::NotFound { name, .. } if name == "Nope"));
    }

    #[tokio::test]
    async fn test_templates_merge_master_children() {
        let master = node("Master");
        let sitemap = node("XMLSitemap");
        let article = node("Article");
        let mut template_children = HashMap::new();
        template_children.insert(master.id, vec![article.clone()]);

        let resolver = IdentifierResolver::new(StubTreeApi {
            template_root: vec![master.clone(), sitemap.clone()],
            template_children,
            ..Default::default()
        });

        assert_eq!(resolver.template_id("Article").await.unwrap(), article.id);
        assert_eq!(resolver.template_id("Master").await.unwrap(), master.id);
        assert_eq!(resolver.template_id("XMLSitemap").await.unwrap(), sitemap.id);
    }

    #[tokio::test]
    async fn test_templates_require_master_and_sitemap_at_root() {
        let resolver = IdentifierResolver::new(StubTreeApi {
            template_root: vec![node("Master")],
            ..Default::default()
        });

        let err = resolver.template_id("Master").await.unwrap_err();
        assert!(matches!(err, CmskitError::Validation { .. }));
    }
}
