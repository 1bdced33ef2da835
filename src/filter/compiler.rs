// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Filter Compiler
//!
//! Renders a filter tree as MongoDB-style query text, consulting a
//! [`TranslationTable`] for every leaf that names a translatable attribute.
//!
//! # Rendering
//!
//! ```text
//! (&(a)(b))          a, b
//! (|(a)(b))          "$or": [{a}, {b}]
//! (!(a))             { "$not:" a}
//! (uid=alice)        "userId":{"$eq": "alice"}
//! (uidNumber=5)      "uidNumber":{"$eq": 5}          int/float record
//! (memberOf=admins)  "groups":{"$in": ["admins"]}    array record
//! (age>=21)          "age":{"$gte": 21}
//! (age<=65)          "age":{"$lte": 65}
//! (mail=*)           "mail":{"$exists": true}
//! (cn=ab*cd*)        "cn":"/^ab*/""/*cd*/"
//! (sn~=smyth)        "sn":"/smyth/"
//! ```
//!
//! Values are emitted verbatim, so the output is not guaranteed to be
//! strict JSON. Only `Or` adds brackets; callers ask for outer braces via
//! the `wrap` flag.

use tracing::{debug, warn};

use super::node::{FilterNode, SubstringPart};
use crate::config::TranslatorConfig;
use crate::metrics;
use crate::translation::TranslationTable;

/// Compilation failure. Any fault aborts the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("error decompiling filter: {0}")]
    Internal(String),
}

/// Compiles filter trees against a borrowed translation table.
pub struct FilterCompiler<'a> {
    table: &'a TranslationTable,
    config: TranslatorConfig,
}

impl<'a> FilterCompiler<'a> {
    pub fn new(table: &'a TranslationTable) -> Self {
        Self::with_config(table, TranslatorConfig::default())
    }

    pub fn with_config(table: &'a TranslationTable, config: TranslatorConfig) -> Self {
        Self { table, config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Render `node` as a query fragment (no outer braces).
    pub fn compile(&self, node: &FilterNode) -> Result<String, CompileError> {
        let _timer = crate::time_compile!();
        let result = self.compile_node(node, 1);
        metrics::record_compile(if result.is_ok() { "success" } else { "error" });
        result
    }

    /// Render `node`, wrapping the result in `{ ... }` when `wrap` is set.
    #[tracing::instrument(skip(self, node), fields(kind = node.kind()))]
    pub fn try_filter_map(&self, node: &FilterNode, wrap: bool) -> Result<String, CompileError> {
        let query = self.compile(node)?;
        debug!(len = query.len(), "Filter compiled");
        if wrap {
            Ok(format!("{{ {} }}", query))
        } else {
            Ok(query)
        }
    }

    /// Like [`try_filter_map`](Self::try_filter_map), but a failed
    /// compilation yields an empty string (never wrapped).
    ///
    /// An empty result is indistinguishable from an empty `And`.
    pub fn filter_map(&self, node: &FilterNode, wrap: bool) -> String {
        match self.try_filter_map(node, wrap) {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, kind = node.kind(), "Filter compilation failed, returning empty query");
                String::new()
            }
        }
    }

    fn compile_node(&self, node: &FilterNode, depth: usize) -> Result<String, CompileError> {
        if depth > self.config.max_depth {
            return Err(CompileError::Internal(format!(
                "filter nesting exceeds {} levels",
                self.config.max_depth
            )));
        }

        match node {
            FilterNode::And(children) => {
                let parts = self.compile_children(children, depth)?;
                Ok(parts.join(", "))
            }
            FilterNode::Or(children) => {
                let parts = self.compile_children(children, depth)?;
                let wrapped: Vec<String> = parts.iter().map(|p| format!("{{{}}}", p)).collect();
                Ok(format!(r#""$or": [{}]"#, wrapped.join(", ")))
            }
            FilterNode::Not(inner) => {
                let inner = self.compile_node(inner, depth + 1)?;
                // Legacy documents carry the colon inside the key
                let key = if self.config.strict_not_key { r#""$not":"# } else { r#""$not:""# };
                Ok(format!("{{ {} {}}}", key, inner))
            }
            FilterNode::Substrings { attribute, parts } => {
                let mut out = format!("\"{}\":", attribute);
                for part in parts {
                    out.push_str(&Self::substring_pattern(part));
                }
                Ok(out)
            }
            FilterNode::EqualityMatch { attribute, value } => Ok(self.equality(attribute, value)),
            FilterNode::GreaterOrEqual { attribute, value } => {
                let (key, _) = self.table.lookup(attribute);
                Ok(format!(r#"{}:{{"$gte": {}}}"#, key, value))
            }
            FilterNode::LessOrEqual { attribute, value } => {
                let (key, _) = self.table.lookup(attribute);
                Ok(format!(r#"{}:{{"$lte": {}}}"#, key, value))
            }
            FilterNode::Present { attribute } => {
                Ok(format!(r#""{}":{{"$exists": true}}"#, attribute))
            }
            FilterNode::ApproxMatch { attribute, value } => {
                let (key, _) = self.table.lookup(attribute);
                Ok(format!(r#"{}:"/{}/""#, key, value))
            }
            FilterNode::ExtensibleMatch { .. } => Err(CompileError::Internal(format!(
                "unsupported filter node: {}",
                node.kind()
            ))),
        }
    }

    fn compile_children(&self, children: &[FilterNode], depth: usize) -> Result<Vec<String>, CompileError> {
        children
            .iter()
            .map(|child| self.compile_node(child, depth + 1))
            .collect()
    }

    fn equality(&self, attribute: &str, value: &str) -> String {
        let (key, record) = self.table.lookup(attribute);
        let rendered = match record {
            Some(record) if record.value_type.is_numeric() => {
                if record.is_array {
                    format!(r#"{{"$in": [{}]}}"#, value)
                } else {
                    format!(r#"{{"$eq": {}}}"#, value)
                }
            }
            Some(record) if record.is_array => format!(r#"{{"$in": ["{}"]}}"#, value),
            _ => format!(r#"{{"$eq": "{}"}}"#, value),
        };
        format!("{}:{}", key, rendered)
    }

    fn substring_pattern(part: &SubstringPart) -> String {
        match part {
            SubstringPart::Initial(s) => format!(r#""/^{}*/""#, s),
            SubstringPart::Any(s) => format!(r#""/*{}*/""#, s),
            // Final parts keep the legacy text verbatim, format artifact included
            SubstringPart::Final(s) => format!(r#""/$s/"%!(EXTRA string=*{})"#, s),
        }
    }
}

/// Compile `node` against `table`, surfacing failures.
pub fn try_filter_map(
    node: &FilterNode,
    table: &TranslationTable,
    wrap: bool,
) -> Result<String, CompileError> {
    FilterCompiler::new(table).try_filter_map(node, wrap)
}

/// Compile `node` against `table`; failures yield an empty string.
pub fn filter_map(node: &FilterNode, table: &TranslationTable, wrap: bool) -> String {
    FilterCompiler::new(table).filter_map(node, wrap)
}
