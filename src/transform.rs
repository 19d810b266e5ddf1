//! Catalog record to display model
//!
//! Pure conversion, no I/O. A `RawRecord` that deserialized successfully
//! always converts.

use catalog_types::{RawRecord, StatTable, ViewModel};

pub fn to_view_model(record: &RawRecord) -> ViewModel {
    ViewModel {
        id: record.id,
        display_name: capitalize(&record.name),
        types: record
            .types
            .iter()
            .map(|slot| capitalize(&slot.kind.name))
            .collect(),
        image: record.sprites.front_default.clone(),
        height: format_tenths(record.height, "m"),
        weight: format_tenths(record.weight, "kg"),
        abilities: record
            .abilities
            .iter()
            .map(|slot| capitalize(&slot.ability.name))
            .collect(),
        stats: record
            .stats
            .iter()
            .map(|entry| (entry.stat.name.as_str(), entry.base_stat))
            .collect::<StatTable>(),
    }
}

/// Upper-case the first character, leave the rest as is.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `value / 10` with its single decimal digit, then the unit:
/// 7 -> "0.7 m", 100 -> "10.0 m".
pub fn format_tenths(value: u32, unit: &str) -> String {
    format!("{}.{} {}", value / 10, value % 10, unit)
}
