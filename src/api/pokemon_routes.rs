//! Pokémon page endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use catalog_types::ViewModel;
use tower_http::trace::TraceLayer;

use crate::catalog::CatalogSource;
use crate::render::PageRenderer;
use crate::resolver::{Resolver, FIRST_PAGE_SIZE};

pub struct PokemonState<S: CatalogSource> {
    resolver: Resolver<S>,
    pages: Arc<PageRenderer>,
}

impl<S: CatalogSource> Clone for PokemonState<S> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            pages: Arc::clone(&self.pages),
        }
    }
}

impl<S: CatalogSource> PokemonState<S> {
    pub fn new(resolver: Resolver<S>, pages: Arc<PageRenderer>) -> Self {
        Self { resolver, pages }
    }

    fn listing(&self, items: &[ViewModel]) -> Response {
        match self.pages.render_listing(items) {
            Ok(body) => Html(body).into_response(),
            Err(e) => render_failure(e),
        }
    }

    fn not_found(&self) -> Response {
        match self.pages.render_not_found() {
            Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
            Err(e) => render_failure(e),
        }
    }
}

fn render_failure(e: crate::error::PageError) -> Response {
    tracing::error!("page render failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

/// Accept only plain decimal digits. Values beyond `i64` saturate; the
/// resolver clamps them to the allow-list anyway.
pub fn parse_amount(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse::<i64>().unwrap_or(i64::MAX))
}

/// GET /
async fn redirect_root() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/pokemon")]).into_response()
}

/// GET /pokemon and GET /pokemon/todos
async fn list_all<S: CatalogSource + 'static>(State(state): State<PokemonState<S>>) -> Response {
    let items = state.resolver.resolve_all().await;
    state.listing(&items)
}

/// GET /pokemon/primeros5
async fn list_first_five<S: CatalogSource + 'static>(
    State(state): State<PokemonState<S>>,
) -> Response {
    let items = state.resolver.resolve_first(FIRST_PAGE_SIZE).await;
    state.listing(&items)
}

/// GET /pokemon/cantidad/:amount
async fn list_amount<S: CatalogSource + 'static>(
    State(state): State<PokemonState<S>>,
    amount: Result<Path<String>, PathRejection>,
) -> Response {
    let amount = match amount {
        Ok(Path(amount)) => amount,
        Err(rejection) => return undecodable_segment(&state, rejection),
    };
    match parse_amount(&amount) {
        Some(n) => {
            let items = state.resolver.resolve_amount(n).await;
            state.listing(&items)
        }
        None => {
            tracing::debug!(amount = %amount, "amount is not an unsigned integer");
            state.not_found()
        }
    }
}

/// GET /pokemon/:identifier
async fn show_single<S: CatalogSource + 'static>(
    State(state): State<PokemonState<S>>,
    identifier: Result<Path<String>, PathRejection>,
) -> Response {
    let identifier = match identifier {
        Ok(Path(identifier)) => identifier,
        Err(rejection) => return undecodable_segment(&state, rejection),
    };
    match state.resolver.resolve_single(&identifier).await {
        Ok(vm) => state.listing(std::slice::from_ref(&vm)),
        Err(rejection) => {
            tracing::debug!("single lookup rejected: {}", rejection);
            state.not_found()
        }
    }
}

/// Segments that don't decode (e.g. invalid UTF-8) get the same 404 page
/// as any other miss.
fn undecodable_segment<S: CatalogSource>(
    state: &PokemonState<S>,
    rejection: PathRejection,
) -> Response {
    tracing::debug!("path segment rejected: {}", rejection.body_text());
    state.not_found()
}

async fn fallback<S: CatalogSource + 'static>(State(state): State<PokemonState<S>>) -> Response {
    state.not_found()
}

/// Create router for the Pokémon pages
pub fn create_pokemon_router<S: CatalogSource + 'static>(state: PokemonState<S>) -> Router {
    Router::new()
        .route("/", get(redirect_root))
        .route("/pokemon", get(list_all::<S>))
        .route("/pokemon/todos", get(list_all::<S>))
        .route("/pokemon/primeros5", get(list_first_five::<S>))
        .route("/pokemon/cantidad/:amount", get(list_amount::<S>))
        .route("/pokemon/:identifier", get(show_single::<S>))
        .fallback(fallback::<S>)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
