/*
SPDX-License-Identifier: MPL-2.0
*/

//! Core model for the reftpl referenced-field template engine.
//!
//! This crate holds the typed model only: template trees, the data
//! dictionary, parsed placeholder occurrences, the expression AST with its
//! operator table, and resolution configuration. The engine that interprets
//! the model lives in `reftpl_engine`.

pub mod config;
pub mod expr;
pub mod placeholder;
pub mod template;
pub mod value;

pub use config::{DateFormat, ResolveConfig};
pub use expr::{strip_matching_quotes, Expr, Operator, OPERATOR_TOKENS};
pub use placeholder::{Placeholder, Splice};
pub use template::TemplateNode;
pub use value::{DataDictionary, FieldValue};
