//! Catalog API client
//!
//! HTTP client for the `/pokemon/{key}` endpoint of the catalog service.

use async_trait::async_trait;
use catalog_types::RawRecord;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use url::Url;

use super::traits::{CatalogKey, CatalogSource};
use crate::config::CatalogConfig;
use crate::error::FetchError;

pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client. The configured timeout applies to each request on
    /// its own, connect through body.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        if config.base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                base: config.base_url.to_string(),
            });
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/pokemon/{key}`, with the key percent-encoded as one segment.
    pub fn endpoint(&self, key: &CatalogKey) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl {
                base: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .push("pokemon")
            .push(&key.path_segment());
        Ok(url)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    fn source_id(&self) -> &'static str {
        "pokeapi"
    }

    async fn fetch(&self, key: &CatalogKey) -> Result<RawRecord, FetchError> {
        let url = self.endpoint(key)?;
        tracing::debug!(%key, %url, "fetching catalog record");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let record: RawRecord = serde_json::from_slice(&body)?;

        tracing::debug!(%key, id = record.id, "catalog record fetched");
        Ok(record)
    }
}
