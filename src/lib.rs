//! Pokedex Proxy - allow-listed catalog pages
//!
//! Fetches entries from the public Pokémon catalog service, keeps only the
//! allow-listed ones, reshapes them for display and renders HTML pages.
//!
//! ## Call chain
//! Route -> Resolver (prefix guard, allow-list) -> CatalogSource fetch ->
//! transform -> PageRenderer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pokedex_proxy::{AllowList, CatalogClient, ProxyConfig, Resolver};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProxyConfig::from_env()?;
//! let client = Arc::new(CatalogClient::new(&config.catalog)?);
//! let resolver = Resolver::new(client, Arc::new(AllowList::standard()));
//! let first_five = resolver.resolve_first(5).await;
//! assert!(first_five.len() <= 5);
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Configuration from environment
pub mod config;

// Fixed set of servable ids
pub mod allow_list;

// Remote catalog access
pub mod catalog;

// RawRecord -> ViewModel
pub mod transform;

// Batch and single lookups
pub mod resolver;

// HTML pages
pub mod render;

// HTTP routes (when enabled)
pub mod api;

pub use allow_list::AllowList;
pub use catalog::{CatalogClient, CatalogKey, CatalogSource};
pub use catalog_types::{RawRecord, StatTable, ViewModel};
pub use config::{CatalogConfig, ProxyConfig};
pub use render::PageRenderer;
pub use resolver::{Rejection, Resolver};
