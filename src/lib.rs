// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! # Filter Translator
//!
//! Translates directory-search (LDAP-style) filter trees into MongoDB-style
//! query documents, renaming attributes and typing values through a
//! translation table.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────────┐
//! │ FilterNode tree      │      │ TranslationTable         │
//! │ (parsed elsewhere)   │      │ uid → userId (string)    │
//! └──────────┬───────────┘      └────────────┬─────────────┘
//!            │                               │ lookup per leaf
//!            ▼                               ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ FilterCompiler                                           │
//! │  • And / Or / Not combinators                            │
//! │  • equality, range, substring, presence, approx leaves   │
//! │  • depth bound (TranslatorConfig::max_depth)             │
//! └──────────────────────────┬───────────────────────────────┘
//!                            ▼
//!              "userId":{"$eq": "alice"}
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use filter_translator::{
//!     filter_map, FilterNode, TranslationRecord, TranslationTable, TranslationType,
//! };
//!
//! let mut table = TranslationTable::new();
//! table.insert("uid", TranslationRecord::new("userId", TranslationType::String));
//!
//! let filter = FilterNode::equality("uid", "alice");
//! assert_eq!(filter_map(&filter, &table, true), r#"{ "userId":{"$eq": "alice"} }"#);
//! ```
//!
//! ## Modules
//!
//! - [`filter`]: filter trees and the [`FilterCompiler`]
//! - [`translation`]: translation table and value types
//! - [`config`]: compiler configuration
//! - [`metrics`]: compile and lookup metrics

pub mod config;
pub mod filter;
pub mod metrics;
pub mod translation;

pub use config::{TranslatorConfig, DEFAULT_MAX_DEPTH};
pub use filter::{
    filter_map, try_filter_map, CompileError, FilterBuilder, FilterCompiler, FilterNode,
    SubstringPart,
};
pub use metrics::LatencyTimer;
pub use translation::{
    TableError, TranslationRecord, TranslationTable, TranslationType, TranslationTypeError,
};
