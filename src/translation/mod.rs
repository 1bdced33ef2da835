// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Attribute translation: renaming and value typing applied to leaf
//! predicates while a filter is compiled.

mod table;
mod value_type;

pub use table::{TableError, TranslationRecord, TranslationTable};
pub use value_type::{TranslationType, TranslationTypeError};
