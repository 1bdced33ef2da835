// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Translation Table
//!
//! Maps directory attribute names onto query-document field names and
//! declares how their values are rendered.
//!
//! # JSON form
//!
//! ```json
//! {
//!     "uid":         { "name": "userId", "type": "string" },
//!     "uidNumber":   { "name": "uidNumber", "type": "int" },
//!     "memberOf":    { "name": "groups", "type": "string", "isArray": true }
//! }
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::value_type::TranslationType;
use crate::metrics;

/// Errors raised while loading a translation table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Table document is not valid JSON or has the wrong shape
    #[error("invalid translation table: {0}")]
    Parse(#[from] serde_json::Error),

    /// Table file could not be read
    #[error("failed to read translation table: {0}")]
    Io(#[from] std::io::Error),
}

/// How a single source attribute is translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Target field name in the query document
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub value_type: TranslationType,
    /// Whether the target field holds an array
    #[serde(rename = "isArray", default)]
    pub is_array: bool,
}

impl TranslationRecord {
    /// Rust field name → JSON key, for every serialized field.
    pub const JSON_FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "name"),
        ("value_type", "type"),
        ("is_array", "isArray"),
    ];

    /// Create a scalar record
    pub fn new(name: impl Into<String>, value_type: TranslationType) -> Self {
        Self {
            name: name.into(),
            value_type,
            is_array: false,
        }
    }

    /// Mark the target field as an array
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// JSON key a Rust field is serialized under.
    pub fn json_field(field: &str) -> Option<&'static str> {
        Self::JSON_FIELDS
            .iter()
            .find(|(rust, _)| *rust == field)
            .map(|(_, json)| *json)
    }
}

/// Source attribute name → [`TranslationRecord`].
///
/// Read-only while filters are compiled. Attributes without an entry pass
/// through unchanged and render as plain string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, TranslationRecord>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON form
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let table: Self = serde_json::from_str(json)?;
        table.loaded();
        Ok(table)
    }

    /// Parse a table from any reader yielding its JSON form
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let table: Self = serde_json::from_reader(reader)?;
        table.loaded();
        Ok(table)
    }

    /// Read and parse a table file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    fn loaded(&self) {
        debug!(entries = self.entries.len(), "Translation table loaded");
        metrics::set_table_entries(self.entries.len());
    }

    /// Add or replace the record for `source`
    pub fn insert(&mut self, source: impl Into<String>, record: TranslationRecord) -> Option<TranslationRecord> {
        self.entries.insert(source.into(), record)
    }

    pub fn get(&self, source: &str) -> Option<&TranslationRecord> {
        self.entries.get(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve `attribute` to its quoted query-document key.
    ///
    /// Returns the configured target name with the matched record, or the
    /// attribute itself and `None` when the table has no entry.
    pub fn lookup(&self, attribute: &str) -> (String, Option<&TranslationRecord>) {
        match self.entries.get(attribute) {
            Some(record) => {
                metrics::record_lookup(true);
                (format!("\"{}\"", record.name), Some(record))
            }
            None => {
                metrics::record_lookup(false);
                (format!("\"{}\"", attribute), None)
            }
        }
    }
}

impl FromIterator<(String, TranslationRecord)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (String, TranslationRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
