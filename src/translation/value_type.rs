// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Translation value types
//!
//! Declares how an asserted value is rendered once its attribute has been
//! translated: numeric types are emitted bare, strings are quoted.
//!
//! # Textual form
//!
//! ```text
//! "int"     - TranslationType::Int     (code 1)
//! "string"  - TranslationType::String  (code 2)
//! "float"   - TranslationType::Float   (code 3)
//! ```
//!
//! Tokens are matched case-insensitively on read and always written in
//! lower case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors raised while converting a [`TranslationType`] to or from its
/// textual or numeric form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationTypeError {
    /// Token is not one of `int`, `string`, `float`
    #[error("Invalid Translation Type: [{token}]")]
    Invalid { token: String },

    /// Numeric code does not name a translation type
    #[error("No Such Translation Type")]
    NoSuchType(u8),
}

/// Declared value type of a translated attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationType {
    Int,
    String,
    Float,
}

impl TranslationType {
    /// Every translation type, in code order.
    pub const ALL: [TranslationType; 3] = [Self::Int, Self::String, Self::Float];

    /// Lower-case token used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Float => "float",
        }
    }

    /// Legacy numeric code (1 = int, 2 = string, 3 = float).
    pub fn code(&self) -> u8 {
        match self {
            Self::Int => 1,
            Self::String => 2,
            Self::Float => 3,
        }
    }

    /// Whether values of this type are emitted without quotes.
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl TryFrom<u8> for TranslationType {
    type Error = TranslationTypeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Int),
            2 => Ok(Self::String),
            3 => Ok(Self::Float),
            other => Err(TranslationTypeError::NoSuchType(other)),
        }
    }
}

impl FromStr for TranslationType {
    type Err = TranslationTypeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim_matches('"').to_ascii_lowercase().as_str() {
            "int" => Ok(Self::Int),
            "string" => Ok(Self::String),
            "float" => Ok(Self::Float),
            _ => Err(TranslationTypeError::Invalid {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for TranslationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TranslationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TranslationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
