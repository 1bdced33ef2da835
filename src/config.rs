// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Configuration for the filter compiler.
//!
//! # Example
//!
//! ```
//! use filter_translator::TranslatorConfig;
//!
//! // Defaults
//! let config = TranslatorConfig::default();
//! assert_eq!(config.max_depth, 256);
//! assert!(!config.strict_not_key);
//!
//! // From a config document; omitted fields keep their defaults
//! let config = TranslatorConfig::from_json_str(r#"{ "max_depth": 64 }"#).unwrap();
//! assert_eq!(config.max_depth, 64);
//! ```

use serde::Deserialize;

/// Deepest filter tree compiled by default. The root counts as level 1.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for [`FilterCompiler`](crate::FilterCompiler).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslatorConfig {
    /// Maximum nesting depth compiled before failing (default: 256)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Emit `"$not":` instead of the legacy `"$not:"` key (default: false)
    #[serde(default)]
    pub strict_not_key: bool,
}

fn default_max_depth() -> usize { DEFAULT_MAX_DEPTH }

impl TranslatorConfig {
    /// Parse a config document
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            strict_not_key: false,
        }
    }
}
