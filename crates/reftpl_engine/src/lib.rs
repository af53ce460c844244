/*
SPDX-License-Identifier: MPL-2.0
*/

//! reftpl engine
//!
//! Resolves `{field}` placeholders embedded in free text or in nested
//! template trees against a flat data dictionary. Placeholders support
//! splice directives (character ranges and delimiter indexing), trailing
//! ternary/comparison expressions evaluated against the resolved value, and
//! position-sensitive letter casing. Designed to run inline while a user
//! types: resolution never fails, it degrades.
//!
//! # Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use reftpl_core::FieldValue;
//! use reftpl_engine::Resolver;
//!
//! let mut data = IndexMap::new();
//! data.insert("name".to_string(), FieldValue::from("ada"));
//! data.insert("list".to_string(), FieldValue::from("a,b,c"));
//!
//! let resolver = Resolver::new(&data);
//! assert_eq!(resolver.resolve_str("{name} wrote it."), "Ada wrote it.");
//! assert_eq!(resolver.resolve_str("pick {list[,:1]}!"), "pick b!");
//! ```

pub mod casing;
pub mod error;
pub mod expr;
pub mod io;
pub mod pseudo;
pub mod resolver;
pub mod scan;

pub use error::EngineError;
pub use expr::evaluate_expression;
pub use pseudo::resolve_pseudo_field;
pub use resolver::{
    replace_placeholders, replace_placeholders_with, Resolver, MAX_RESOLVE_DEPTH,
};
pub use scan::{parse_body, scan_balanced, scan_with_pattern, RawRegion};
