//! Catalog service access
//!
//! - `CatalogSource`: the seam the resolver fetches through
//! - `CatalogClient`: reqwest implementation against the live service
//! - `CatalogKey`: numeric id or lower-cased name

mod client;
mod traits;

pub use client::CatalogClient;
pub use traits::{CatalogKey, CatalogSource};
