//! Shared fixtures for integration tests
//!
//! - `pokemon_json`: a catalog payload shaped like the live service's
//! - `StubCatalog`: in-memory `CatalogSource`
//! - `spawn_stub_catalog`: the same data served over HTTP on 127.0.0.1

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Router};
use pokedex_proxy::error::FetchError;
use pokedex_proxy::{CatalogKey, CatalogSource, RawRecord};
use serde_json::{json, Value};
use url::Url;

/// (id, name, first type) for every allow-listed entry plus one outsider.
pub const ENTRIES: [(u32, &str, &str); 11] = [
    (1, "bulbasaur", "grass"),
    (2, "ivysaur", "grass"),
    (4, "charmander", "fire"),
    (7, "squirtle", "water"),
    (25, "pikachu", "electric"),
    (39, "jigglypuff", "normal"),
    (52, "meowth", "normal"),
    (54, "psyduck", "water"),
    (94, "gengar", "ghost"),
    (95, "onix", "rock"),
    (143, "snorlax", "normal"),
];

pub fn pokemon_json(id: u32, name: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "base_experience": 64,
        "order": id,
        "types": [{"slot": 1, "type": {"name": kind, "url": "https://pokeapi.co/api/v2/type/1/"}}],
        "sprites": {
            "front_default": format!("https://img.example/{}.png", id),
            "back_default": null
        },
        "height": 7,
        "weight": 69,
        "abilities": [
            {"ability": {"name": "overgrow", "url": "x"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": "y"}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": "z"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack", "url": "z"}},
            {"base_stat": 45, "effort": 0, "stat": {"name": "speed", "url": "z"}}
        ]
    })
}

fn lookup(key: &str) -> Option<Value> {
    ENTRIES
        .iter()
        .find(|(id, name, _)| id.to_string() == key || *name == key)
        .map(|(id, name, kind)| pokemon_json(*id, name, kind))
}

/// In-memory catalog. Ids in `failing` time out.
#[derive(Default)]
pub struct StubCatalog {
    failing: Vec<u32>,
    calls: AtomicUsize,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(ids: &[u32]) -> Self {
        Self {
            failing: ids.to_vec(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StubCatalog {
    fn source_id(&self) -> &'static str {
        "stub"
    }

    async fn fetch(&self, key: &CatalogKey) -> Result<RawRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let CatalogKey::Id(id) = key {
            if self.failing.contains(id) {
                return Err(FetchError::Timeout);
            }
        }
        let value = lookup(&key.path_segment()).ok_or(FetchError::Status(404))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Stub catalog endpoint. Besides the fixture entries:
/// `broken` -> 200 with invalid JSON, `partial` -> 200 missing `stats`,
/// `slow` -> answers after 2 s, `accepted` -> 202, id 7 -> 500.
async fn stub_entry(Path(key): Path<String>) -> impl IntoResponse {
    match key.as_str() {
        "broken" => (StatusCode::OK, "{not json".to_string()),
        "partial" => (
            StatusCode::OK,
            json!({"id": 1, "name": "bulbasaur", "types": [], "sprites": {},
                   "height": 7, "weight": 69, "abilities": []})
            .to_string(),
        ),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            (StatusCode::OK, pokemon_json(1, "bulbasaur", "grass").to_string())
        }
        "accepted" => (StatusCode::ACCEPTED, pokemon_json(1, "bulbasaur", "grass").to_string()),
        "7" => (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
        other => match lookup(other) {
            Some(body) => (StatusCode::OK, body.to_string()),
            None => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        },
    }
}

/// Serve the stub catalog on an ephemeral port and return its base URL
/// (`http://127.0.0.1:{port}/api/v2`).
pub async fn spawn_stub_catalog() -> Url {
    let app = Router::new().route("/api/v2/pokemon/:key", get(stub_entry));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{}/api/v2", addr)).unwrap()
}

/// Map of (name -> id) for assertions.
pub fn ids_by_name() -> HashMap<&'static str, u32> {
    ENTRIES.iter().map(|(id, name, _)| (*name, *id)).collect()
}
