//! Catalog Types - Level 1 Foundation Types
//!
//! Pure data structures shared by the proxy: the catalog service's wire
//! record and the display model handed to templates.
//!
//! ## Architecture Level: LEVEL 1 (Foundation)
//!
//! This crate has no I/O, no async and no workspace dependencies. The proxy
//! crate builds on it; nothing here knows about HTTP.
//!
//! ## Contents
//!
//! - `RawRecord` and its nested wire structures (deserialized from the catalog)
//! - `ViewModel` (serialized into template contexts)
//! - `StatTable`, an insertion-ordered stat map

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ============================================================================
// WIRE RECORD
// ============================================================================

/// A catalog entry exactly as the catalog service returns it.
///
/// Every field except the sprite URL is required; a body missing any of them
/// fails to deserialize instead of producing a half-filled record. Unknown
/// fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub sprites: Sprites,
    /// Decimeters
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatEntry>,
}

/// `{ "name": ..., "url": ... }` reference used throughout the catalog.
/// Only the name is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub stat: NamedResource,
    pub base_stat: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// May be `null` or absent for entries without artwork.
    #[serde(default)]
    pub front_default: Option<String>,
}

// ============================================================================
// DISPLAY MODEL
// ============================================================================

/// Display representation of one catalog entry.
///
/// Serialized field names are the keys the page templates read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub display_name: String,
    #[serde(rename = "tipo")]
    pub types: Vec<String>,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
    #[serde(rename = "altura")]
    pub height: String,
    #[serde(rename = "peso")]
    pub weight: String,
    #[serde(rename = "habilidades")]
    pub abilities: Vec<String>,
    #[serde(rename = "estadisticas")]
    pub stats: StatTable,
}

/// Stat name to base value, in first-insertion order.
///
/// Inserting an existing name replaces its value without moving it.
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatTable {
    entries: Vec<(String, i64)>,
}

impl StatTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: i64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for StatTable {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut table = StatTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

impl Serialize for StatTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
