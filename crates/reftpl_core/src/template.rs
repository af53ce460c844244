/*
SPDX-License-Identifier: MPL-2.0
*/

//! Template trees.
//!
//! A template is either a plain string carrying `{field}` placeholders, or a
//! nested mapping whose text leaves are themselves templates. Scalars other
//! than text pass through resolution untouched. Trees are never mutated in
//! place; the engine returns a new resolved copy.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in a template tree.
///
/// Deserializes untagged, so arbitrary JSON/YAML documents load directly:
/// strings become [`TemplateNode::Text`], mappings recurse per key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum TemplateNode {
    /// A templated string; the only variant the engine rewrites.
    Text(String),
    /// A nested mapping, resolved key by key.
    Map(IndexMap<String, TemplateNode>),
    /// Numbers pass through unchanged.
    Number(f64),
    /// Booleans pass through unchanged.
    Bool(bool),
    /// Nulls pass through unchanged.
    Null,
}

impl TemplateNode {
    /// The text content, if this node is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TemplateNode::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, TemplateNode::Map(_))
    }
}

impl From<&str> for TemplateNode {
    fn from(s: &str) -> Self {
        TemplateNode::Text(s.to_string())
    }
}

impl From<String> for TemplateNode {
    fn from(s: String) -> Self {
        TemplateNode::Text(s)
    }
}
