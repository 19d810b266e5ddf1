//! CatalogSource trait and lookup keys

use std::fmt;

use async_trait::async_trait;
use catalog_types::RawRecord;

use crate::error::FetchError;

/// What to look up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogKey {
    Id(u32),
    /// Always stored lower-cased.
    Name(String),
}

impl CatalogKey {
    /// Build a textual key. The catalog's names are lower-case, so the
    /// input is folded here.
    pub fn name(raw: &str) -> Self {
        CatalogKey::Name(raw.to_lowercase())
    }

    /// The path segment sent to the catalog (unencoded).
    pub fn path_segment(&self) -> String {
        match self {
            CatalogKey::Id(id) => id.to_string(),
            CatalogKey::Name(name) => name.clone(),
        }
    }
}

impl From<u32> for CatalogKey {
    fn from(id: u32) -> Self {
        CatalogKey::Id(id)
    }
}

impl From<&str> for CatalogKey {
    fn from(raw: &str) -> Self {
        CatalogKey::name(raw)
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKey::Id(id) => write!(f, "#{}", id),
            CatalogKey::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// A source of catalog records.
///
/// # Implementation Notes
///
/// - One outbound call per `fetch`; no caching, no retries
/// - Every failure is returned as a `FetchError`, never a panic
/// - Implementations must be usable from concurrent tasks
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short identifier for logs (e.g. "pokeapi")
    fn source_id(&self) -> &'static str;

    /// Fetch a single record.
    async fn fetch(&self, key: &CatalogKey) -> Result<RawRecord, FetchError>;
}
