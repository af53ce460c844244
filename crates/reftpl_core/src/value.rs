/*
SPDX-License-Identifier: MPL-2.0
*/

//! Field values and the data dictionary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The data dictionary: field identifiers mapped to resolved values.
///
/// Supplied by the caller per resolution call; the engine only reads it.
pub type DataDictionary = IndexMap<String, FieldValue>;

/// A value a placeholder can resolve to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<FieldValue>),
    Map(IndexMap<String, FieldValue>),
    Null,
}

impl FieldValue {
    /// Render this value as substitution text.
    ///
    /// Lists join their scalar elements with `", "`. Maps and nulls have no
    /// text rendition and resolve as missing.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::List(items) => {
                let parts: Vec<String> = items.iter().filter_map(FieldValue::as_text).collect();
                Some(parts.join(", "))
            }
            FieldValue::Map(_) | FieldValue::Null => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}
