// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Filter Tree - parsed directory-search filters
//!
//! Trees are produced by the search-request parser and handed to the
//! compiler read-only. The constructors here exist for callers that build
//! filters programmatically and for tests.
//!
//! # Example
//!
//! ```rust
//! use filter_translator::{FilterBuilder, FilterNode};
//!
//! // (&(uid=alice)(!(employeeType=contractor)))
//! let filter = FilterNode::equality("uid", "alice")
//!     .and(FilterNode::equality("employeeType", "contractor").negate());
//!
//! // (|(cn=bob*)(mail=*))
//! let filter = FilterBuilder::new()
//!     .prefix("cn", "bob")
//!     .present("mail")
//!     .build_or();
//! ```

use serde::{Deserialize, Serialize};

/// One component of a substring assertion: `initial*any*final`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstringPart {
    Initial(String),
    Any(String),
    Final(String),
}

/// Filter tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterNode {
    /// `(&(a)(b)...)`
    And(Vec<FilterNode>),
    /// `(|(a)(b)...)`
    Or(Vec<FilterNode>),
    /// `(!(a))`
    Not(Box<FilterNode>),
    /// `(attr=ini*any*fin)`
    Substrings {
        attribute: String,
        parts: Vec<SubstringPart>,
    },
    /// `(attr=value)`
    EqualityMatch { attribute: String, value: String },
    /// `(attr>=value)`
    GreaterOrEqual { attribute: String, value: String },
    /// `(attr<=value)`
    LessOrEqual { attribute: String, value: String },
    /// `(attr=*)`
    Present { attribute: String },
    /// `(attr~=value)`
    ApproxMatch { attribute: String, value: String },
    /// `(attr:dn:rule:=value)`
    ExtensibleMatch {
        matching_rule: Option<String>,
        attribute: Option<String>,
        value: String,
        dn_attributes: bool,
    },
}

impl FilterNode {
    pub fn equality(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::EqualityMatch {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn greater_or_equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::GreaterOrEqual {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn less_or_equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::LessOrEqual {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn present(attribute: impl Into<String>) -> Self {
        Self::Present {
            attribute: attribute.into(),
        }
    }

    pub fn approx(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApproxMatch {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn substrings(attribute: impl Into<String>, parts: Vec<SubstringPart>) -> Self {
        Self::Substrings {
            attribute: attribute.into(),
            parts,
        }
    }

    /// Extensible match on `attribute` using `matching_rule`
    pub fn extensible(
        matching_rule: Option<String>,
        attribute: Option<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::ExtensibleMatch {
            matching_rule,
            attribute,
            value: value.into(),
            dn_attributes: false,
        }
    }

    /// Combine with AND
    pub fn and(self, other: FilterNode) -> Self {
        Self::And(vec![self, other])
    }

    /// Combine with OR
    pub fn or(self, other: FilterNode) -> Self {
        Self::Or(vec![self, other])
    }

    /// Negate
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Short name of the node kind, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::And(_) => "and",
            Self::Or(_) => "or",
            Self::Not(_) => "not",
            Self::Substrings { .. } => "substrings",
            Self::EqualityMatch { .. } => "equalityMatch",
            Self::GreaterOrEqual { .. } => "greaterOrEqual",
            Self::LessOrEqual { .. } => "lessOrEqual",
            Self::Present { .. } => "present",
            Self::ApproxMatch { .. } => "approxMatch",
            Self::ExtensibleMatch { .. } => "extensibleMatch",
        }
    }

    /// Nesting depth of the tree; a lone leaf has depth 1.
    ///
    /// Walks the tree with an explicit stack, so it is safe to call on
    /// trees too deep to compile.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            match node {
                Self::And(children) | Self::Or(children) => {
                    stack.extend(children.iter().map(|c| (c, depth + 1)));
                }
                Self::Not(inner) => stack.push((inner, depth + 1)),
                _ => {}
            }
        }
        max
    }
}

/// Builder for flat AND/OR filters
#[derive(Default)]
pub struct FilterBuilder {
    nodes: Vec<FilterNode>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add an arbitrary node
    pub fn node(mut self, node: FilterNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add `(attr=value)`
    pub fn equality(self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.node(FilterNode::equality(attribute, value))
    }

    /// Add `(attr>=min)` and/or `(attr<=max)`
    pub fn range(mut self, attribute: impl Into<String>, min: Option<&str>, max: Option<&str>) -> Self {
        let attribute = attribute.into();
        if let Some(min) = min {
            self.nodes.push(FilterNode::greater_or_equal(attribute.clone(), min));
        }
        if let Some(max) = max {
            self.nodes.push(FilterNode::less_or_equal(attribute, max));
        }
        self
    }

    /// Add `(attr=*)`
    pub fn present(self, attribute: impl Into<String>) -> Self {
        self.node(FilterNode::present(attribute))
    }

    /// Add `(attr=prefix*)`
    pub fn prefix(self, attribute: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.node(FilterNode::substrings(
            attribute,
            vec![SubstringPart::Initial(prefix.into())],
        ))
    }

    /// Add `(attr=*text*)`
    pub fn contains(self, attribute: impl Into<String>, text: impl Into<String>) -> Self {
        self.node(FilterNode::substrings(
            attribute,
            vec![SubstringPart::Any(text.into())],
        ))
    }

    /// Add `(attr~=value)`
    pub fn approx(self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.node(FilterNode::approx(attribute, value))
    }

    /// Build with AND semantics. A single node is returned as-is.
    pub fn build_and(mut self) -> FilterNode {
        if self.nodes.len() == 1 {
            if let Some(node) = self.nodes.pop() {
                return node;
            }
        }
        FilterNode::And(self.nodes)
    }

    /// Build with OR semantics. A single node is returned as-is.
    pub fn build_or(mut self) -> FilterNode {
        if self.nodes.len() == 1 {
            if let Some(node) = self.nodes.pop() {
                return node;
            }
        }
        FilterNode::Or(self.nodes)
    }
}
