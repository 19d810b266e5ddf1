//! Runtime configuration
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file by the binary). Every variable has a default; a value that is
//! present but unparsable is a startup error.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(8);
pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;
pub const DEFAULT_PORT: u16 = 5000;

/// Catalog client settings
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    /// Applied to each request independently.
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub catalog: CatalogConfig,
    /// Upper bound on in-flight catalog requests per page.
    pub fetch_concurrency: usize,
    pub bind_addr: SocketAddr,
}

impl ProxyConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup, so tests don't have
    /// to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url =
            lookup("POKEDEX_CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let base_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            var: "POKEDEX_CATALOG_URL",
            source,
        })?;

        let mut config = Self {
            catalog: CatalogConfig::new(base_url),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
        };

        if let Some(raw) = lookup("POKEDEX_FETCH_TIMEOUT_SECS") {
            let secs = parse_var::<u64>("POKEDEX_FETCH_TIMEOUT_SECS", &raw, "a whole number of seconds")?;
            config.catalog.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("POKEDEX_FETCH_CONCURRENCY") {
            let limit = parse_var::<usize>("POKEDEX_FETCH_CONCURRENCY", &raw, "a positive integer")?;
            if limit == 0 {
                return Err(ConfigError::InvalidValue {
                    var: "POKEDEX_FETCH_CONCURRENCY",
                    value: raw,
                    expected: "a positive integer",
                });
            }
            config.fetch_concurrency = limit;
        }

        if let Some(raw) = lookup("POKEDEX_BIND_ADDR") {
            let ip = parse_var::<IpAddr>("POKEDEX_BIND_ADDR", &raw, "an IP address")?;
            config.bind_addr.set_ip(ip);
        }

        if let Some(raw) = lookup("SERVER_PORT") {
            let port = parse_var::<u16>("SERVER_PORT", &raw, "a port number")?;
            config.bind_addr.set_port(port);
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
        expected,
    })
}
