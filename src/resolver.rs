//! Identifier and batch resolution
//!
//! Drives a `CatalogSource` plus the transformer for one or many ids and
//! enforces the allow-list. Every failure is absorbed here: a batch shrinks
//! by the entries that failed, a single lookup becomes a `Rejection`.

use std::sync::Arc;

use catalog_types::ViewModel;
use futures::stream::{self, StreamExt};
use thiserror::Error;

use crate::allow_list::AllowList;
use crate::catalog::{CatalogKey, CatalogSource};
use crate::config::DEFAULT_FETCH_CONCURRENCY;
use crate::transform::to_view_model;

/// Path segments starting with this belong to the amount route.
pub const RESERVED_PREFIX: &str = "cantidad";

/// Number of entries on the "first five" page.
pub const FIRST_PAGE_SIZE: usize = 5;

/// Why a single lookup was refused. All variants look the same to the
/// client (404); the reason is for logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("identifier '{0}' uses the reserved prefix")]
    ReservedPrefix(String),

    #[error("identifier '{0}' not found in catalog")]
    NotFound(String),

    #[error("catalog id {0} is not allow-listed")]
    NotAllowed(u32),
}

pub struct Resolver<S: CatalogSource> {
    source: Arc<S>,
    allow_list: Arc<AllowList>,
    concurrency: usize,
}

impl<S: CatalogSource> Clone for Resolver<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            allow_list: Arc::clone(&self.allow_list),
            concurrency: self.concurrency,
        }
    }
}

impl<S: CatalogSource> Resolver<S> {
    pub fn new(source: Arc<S>, allow_list: Arc<AllowList>) -> Self {
        Self {
            source,
            allow_list,
            concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    /// Maximum in-flight fetches per batch; 0 is treated as 1.
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit.max(1);
        self
    }

    /// Fetch and transform one entry. Any fetch failure yields `None`.
    pub async fn fetch_one(&self, key: &CatalogKey) -> Option<ViewModel> {
        match self.source.fetch(key).await {
            Ok(record) => Some(to_view_model(&record)),
            Err(e) if e.is_expected() => {
                tracing::debug!(source = self.source.source_id(), %key, "lookup miss: {}", e);
                None
            }
            Err(e) => {
                tracing::warn!(source = self.source.source_id(), %key, "lookup failed: {}", e);
                None
            }
        }
    }

    /// Resolve `ids` in order, dropping the ones that fail.
    ///
    /// Up to `concurrency` fetches run at once. Output order follows input
    /// order regardless of which fetch finishes first, and one failing
    /// fetch never affects the others.
    pub async fn resolve_many(&self, ids: &[u32]) -> Vec<ViewModel> {
        let results: Vec<Option<ViewModel>> = stream::iter(ids.iter().copied())
            .map(|id| async move { self.fetch_one(&CatalogKey::Id(id)).await })
            .buffered(self.concurrency)
            .collect()
            .await;

        let items: Vec<ViewModel> = results.into_iter().flatten().collect();
        if items.len() < ids.len() {
            tracing::info!(
                requested = ids.len(),
                resolved = items.len(),
                "batch resolved with omissions"
            );
        }
        items
    }

    /// Every allow-listed entry.
    pub async fn resolve_all(&self) -> Vec<ViewModel> {
        self.resolve_many(self.allow_list.ids()).await
    }

    /// The first `n` allow-listed entries.
    pub async fn resolve_first(&self, n: usize) -> Vec<ViewModel> {
        self.resolve_many(self.allow_list.first(n)).await
    }

    /// Clamp `n` into the allow-list and resolve that many.
    pub async fn resolve_amount(&self, n: i64) -> Vec<ViewModel> {
        self.resolve_many(self.allow_list.select_amount(n)).await
    }

    /// Single lookup by name or numeric string.
    ///
    /// First match wins:
    /// 1. reserved prefix -> reject without touching the catalog
    /// 2. lower-cased lookup fails -> reject
    /// 3. id outside the allow-list -> reject
    /// 4. accept
    pub async fn resolve_single(&self, raw: &str) -> Result<ViewModel, Rejection> {
        if raw.starts_with(RESERVED_PREFIX) {
            return Err(Rejection::ReservedPrefix(raw.to_string()));
        }

        let key = CatalogKey::name(raw);
        let vm = self
            .fetch_one(&key)
            .await
            .ok_or_else(|| Rejection::NotFound(raw.to_string()))?;

        if !self.allow_list.contains(vm.id) {
            return Err(Rejection::NotAllowed(vm.id));
        }

        Ok(vm)
    }
}
