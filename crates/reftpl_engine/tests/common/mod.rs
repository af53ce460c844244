/*
SPDX-License-Identifier: MPL-2.0
*/

use indexmap::IndexMap;
use reftpl_core::{DataDictionary, FieldValue};

/// Build a data dictionary from string pairs.
pub fn dict(pairs: &[(&str, &str)]) -> DataDictionary {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
        .collect::<IndexMap<_, _>>()
}
