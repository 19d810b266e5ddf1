//! Pokedex web server
//!
//! Serves the allow-listed Pokémon pages over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server
//! cargo run --bin pokedex_server
//!
//! # Pages
//! curl -i http://localhost:5000/
//! curl http://localhost:5000/pokemon
//! curl http://localhost:5000/pokemon/primeros5
//! curl http://localhost:5000/pokemon/cantidad/3
//! curl http://localhost:5000/pokemon/pikachu
//! ```
//!
//! Settings are read from the environment (or a `.env` file):
//! `POKEDEX_CATALOG_URL`, `POKEDEX_FETCH_TIMEOUT_SECS`,
//! `POKEDEX_FETCH_CONCURRENCY`, `POKEDEX_BIND_ADDR`, `SERVER_PORT`, `RUST_LOG`.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_proxy::api::{create_pokemon_router, PokemonState};
use pokedex_proxy::{AllowList, CatalogClient, PageRenderer, ProxyConfig, Resolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pokedex_proxy=info,pokedex_server=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ProxyConfig::from_env().context("invalid configuration")?;
    let client = CatalogClient::new(&config.catalog).context("failed to create catalog client")?;
    tracing::info!(
        catalog = %client.base_url(),
        timeout_secs = config.catalog.timeout.as_secs(),
        concurrency = config.fetch_concurrency,
        "Starting Pokedex server"
    );

    let allow_list = Arc::new(AllowList::standard());
    let resolver =
        Resolver::new(Arc::new(client), allow_list).with_concurrency(config.fetch_concurrency);
    let pages = Arc::new(PageRenderer::new().context("failed to load page templates")?);

    let app = create_pokemon_router(PokemonState::new(resolver, pages));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
