//! Character records and entry-name rules.

use crate::median::Median;

/// Suffix of per-character payload files.
pub const RECORD_SUFFIX: &str = ".json";

/// File name of the combined index.
pub const INDEX_FILE_NAME: &str = "all.json";

/// Stroke data for one character.
///
/// Only `strokes` and `medians` are interpreted. Every other field of the payload
/// (`radStrokes`, for instance) is kept in `extra` and written back untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterRecord {
    /// SVG path data, one outline per stroke.
    pub strokes: Vec<String>,
    /// Guide points per stroke.
    pub medians: Vec<Median>,
    /// Pass-through fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Derive the character identifier from an entry name.
///
/// Returns `Some` only for `<c>.json` where `<c>` is exactly one character, so
/// `all.json` and multi-character names are rejected.
pub fn identifier_for(entry_name: &str) -> Option<&str> {
    let stem = entry_name.strip_suffix(RECORD_SUFFIX)?;
    let mut chars = stem.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => Some(stem),
        _ => None,
    }
}

/// Output file name for a character identifier.
pub fn output_name(identifier: &str) -> String {
    format!("{identifier}{RECORD_SUFFIX}")
}

#[cfg(test)]
#[path = "../tests/unit/record.rs"]
mod tests;
