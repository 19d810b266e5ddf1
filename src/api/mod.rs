//! HTTP surface
//!
//! HTML pages over the resolver. Routing decisions that belong to the
//! lookup itself (reserved prefix, allow-list) live in `resolver`.

#[cfg(feature = "server")]
pub mod pokemon_routes;

#[cfg(feature = "server")]
pub use pokemon_routes::{create_pokemon_router, PokemonState};
