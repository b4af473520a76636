//! Two-way station name lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::StationCode;

use super::error::StationError;

/// One entry of the station reference file.
///
/// The file is an array of `{"id": "HKI", "value": "Helsinki asema"}`
/// objects. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StationEntry {
    /// Short code
    pub id: String,
    /// Long, human-readable name
    pub value: String,
}

impl StationEntry {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Immutable long name ↔ station code mapping.
///
/// Every code maps to exactly one long name and back. Entries that would
/// break this are dropped while loading.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    by_name: HashMap<String, StationCode>,
    by_code: HashMap<StationCode, String>,
    /// Long names in reference-file order, for suggestions.
    names: Vec<String>,
}

impl StationDirectory {
    /// Build a directory from reference entries.
    ///
    /// Skips entries whose code is the `null` placeholder, whose long name
    /// is a bracketed alternate form, or that would reuse a code or name
    /// already taken by an earlier entry.
    pub fn from_entries(entries: impl IntoIterator<Item = StationEntry>) -> Self {
        let mut directory = Self::default();

        for entry in entries {
            if entry.id.eq_ignore_ascii_case("null") {
                continue;
            }
            if entry.value.contains('[') {
                debug!(name = %entry.value, "skipping alternate station name");
                continue;
            }
            let Ok(code) = StationCode::parse(&entry.id) else {
                debug!(id = %entry.id, name = %entry.value, "skipping invalid station code");
                continue;
            };
            if directory.by_code.contains_key(&code) || directory.by_name.contains_key(&entry.value)
            {
                debug!(%code, name = %entry.value, "skipping duplicate station entry");
                continue;
            }

            directory.by_code.insert(code.clone(), entry.value.clone());
            directory.by_name.insert(entry.value.clone(), code);
            directory.names.push(entry.value);
        }

        directory
    }

    /// Parse reference data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StationError> {
        let entries: Vec<StationEntry> =
            serde_json::from_str(json).map_err(|e| StationError::Json {
                message: e.to_string(),
            })?;
        Ok(Self::from_entries(entries))
    }

    /// Load reference data from a UTF-8 JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Look up a long name by code. The code is uppercased first.
    pub fn long_name_for(&self, code: &str) -> Option<&str> {
        self.by_code.get(code.to_uppercase().as_str()).map(String::as_str)
    }

    /// Look up a code by exact long name.
    pub fn code_for(&self, long_name: &str) -> Option<&StationCode> {
        self.by_name.get(long_name)
    }

    /// Long names containing `query`, in reference-file order.
    ///
    /// The query is capitalized first (first letter upper, rest lower), so
    /// `"tampere"` and `"TAMPERE"` both find `"Tampere asema"`.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = capitalize(query);

        self.names
            .iter()
            .filter(|name| name.contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// All long names, in reference-file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
