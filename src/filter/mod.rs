// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Filter trees and their compilation to query documents.
//!
//! # Architecture
//!
//! ```text
//! FilterNode (tree, from the search-request parser)
//!     ↓
//! FilterCompiler ──→ TranslationTable lookups per leaf
//!     ↓
//! query fragment  ──→ optional { ... } wrap
//! ```

mod compiler;
mod node;

pub use compiler::{filter_map, try_filter_map, CompileError, FilterCompiler};
pub use node::{FilterBuilder, FilterNode, SubstringPart};
