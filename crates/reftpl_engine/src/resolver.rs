/*
SPDX-License-Identifier: MPL-2.0
*/

//! The placeholder replacement engine.
//!
//! Resolution walks a template tree, and for each text leaf:
//!
//! 1. scans for placeholder occurrences (outermost balanced `{...}`),
//! 2. looks each field up in the data dictionary, falling back to
//!    pseudo-fields (`{TODAY}`, `{NOW}`, `{TIME}`),
//! 3. applies the splice directive, then the operation-logic expression
//!    (with the spliced value as left operand), then position casing,
//! 4. substitutes all replacements in descending start-offset order, so
//!    earlier spans never invalidate later ones.
//!
//! Nested bodies (`{a{b}c}`) and operation logic containing further
//! referenced fields are resolved recursively, bounded by
//! [`MAX_RESOLVE_DEPTH`]. Resolution never fails; missing fields become
//! empty strings (or stay verbatim in strict mode) and are logged.

use crate::casing::apply_casing;
use crate::expr::evaluate_expression;
use crate::pseudo::resolve_pseudo_field;
use crate::scan::{parse_body, scan_balanced, scan_with_pattern, RawRegion};
use log::{debug, warn};
use regex::Regex;
use reftpl_core::{DataDictionary, FieldValue, Placeholder, ResolveConfig, TemplateNode};

/// Recursion ceiling for nested placeholder and operation-logic
/// resolution. Keeps pathological self-referencing input finite.
pub const MAX_RESOLVE_DEPTH: usize = 8;

/// Resolves templates against one data dictionary.
///
/// Borrows its inputs and keeps no state across calls; a `Resolver` is
/// cheap to construct per resolution.
#[derive(Debug)]
pub struct Resolver<'a> {
    data: &'a DataDictionary,
    config: ResolveConfig,
    pattern: Option<&'a Regex>,
}

impl<'a> Resolver<'a> {
    pub fn new(data: &'a DataDictionary) -> Self {
        Resolver {
            data,
            config: ResolveConfig::default(),
            pattern: None,
        }
    }

    pub fn with_config(mut self, config: ResolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default balanced-brace scanner with a caller-supplied
    /// pattern.
    pub fn with_pattern(mut self, pattern: &'a Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Resolve a template tree, returning a new tree of the same shape.
    pub fn resolve(&self, template: &TemplateNode) -> TemplateNode {
        self.resolve_node(template, 0)
    }

    /// Resolve a plain template string.
    pub fn resolve_str(&self, template: &str) -> String {
        self.resolve_str_at(template, 0)
    }

    /// Parse a template string into its placeholder occurrences without
    /// substituting. Bodies that still contain nested placeholders are
    /// resolved first, exactly as during substitution.
    pub fn placeholders(&self, template: &str) -> Vec<Placeholder> {
        self.regions(template)
            .into_iter()
            .filter_map(|region| self.parse_region(&region, 0))
            .collect()
    }

    fn resolve_node(&self, node: &TemplateNode, depth: usize) -> TemplateNode {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return node.clone();
        }
        match node {
            TemplateNode::Text(s) => TemplateNode::Text(self.resolve_str_at(s, 0)),
            TemplateNode::Map(map) => {
                TemplateNode::Map(
                    map.iter()
                        .map(|(key, value)| (key.clone(), self.resolve_node(value, depth + 1)))
                        .collect(),
                )
            }
            other => other.clone(),
        }
    }

    fn regions(&self, template: &str) -> Vec<RawRegion> {
        match self.pattern {
            Some(pattern) => scan_with_pattern(template, pattern),
            None => scan_balanced(template),
        }
    }

    fn resolve_str_at(&self, template: &str, depth: usize) -> String {
        if depth > MAX_RESOLVE_DEPTH {
            debug!("resolution depth exceeded, leaving {:?} as-is", template);
            return template.to_string();
        }
        let mut output = template.to_string();
        // Descending start order: replacing a later span never shifts an
        // earlier one.
        for region in self.regions(template).iter().rev() {
            if let Some(replacement) = self.resolve_region(template, region, depth) {
                output.replace_range(region.span.clone(), &replacement);
            }
        }
        output
    }

    fn parse_region(&self, region: &RawRegion, depth: usize) -> Option<Placeholder> {
        // Inner placeholders resolve before the enclosing body is parsed.
        let body = if region.body.contains('{') {
            self.resolve_str_at(&region.body, depth + 1)
        } else {
            region.body.clone()
        };
        parse_body(&body, region.span.clone())
    }

    /// Produce the replacement for one region, or `None` to leave the
    /// region verbatim (malformed body, or unresolved under strict mode).
    fn resolve_region(&self, template: &str, region: &RawRegion, depth: usize) -> Option<String> {
        let Some(placeholder) = self.parse_region(region, depth) else {
            debug!("skipping malformed placeholder {:?}", region.body);
            return None;
        };

        let looked_up = self
            .data
            .get(&placeholder.field)
            .and_then(FieldValue::as_text)
            .or_else(|| resolve_pseudo_field(&placeholder.field, &self.config));

        let mut value = match looked_up {
            Some(value) => value,
            None => {
                warn!("unresolved placeholder field '{}'", placeholder.field);
                if self.config.strict {
                    return None;
                }
                String::new()
            }
        };

        if let Some(splice) = &placeholder.splice {
            value = splice.apply(&value);
        }

        if let Some(logic) = &placeholder.logic {
            // Either side of the expression may itself carry referenced
            // fields; resolve both before evaluating.
            if value.contains('{') {
                value = self.resolve_str_at(&value, depth + 1);
            }
            let logic = if logic.contains('{') {
                self.resolve_str_at(logic, depth + 1)
            } else {
                logic.clone()
            };
            let expression = format!("{} {}", quote_operand(&value), logic);
            value = evaluate_expression(&expression, &value);
        }

        // Position casing applies to the user-visible template only; a
        // recursive call is building a field id or an operand, where
        // rewriting the first letter would corrupt the lookup.
        if depth > 0 {
            return Some(value);
        }
        Some(apply_casing(
            &value,
            template,
            region.span.start,
            &placeholder.field,
        ))
    }
}

/// Quote a resolved value so it lexes as a single operand.
fn quote_operand(value: &str) -> String {
    for quote in ['\'', '"', '`'] {
        if !value.contains(quote) {
            return format!("{quote}{value}{quote}");
        }
    }
    // Contains all three quote characters; let the lexer take it bare.
    value.to_string()
}

/// Resolve `template` against `data` with default options.
pub fn replace_placeholders(template: &TemplateNode, data: &DataDictionary) -> TemplateNode {
    Resolver::new(data).resolve(template)
}

/// Resolve `template` against `data` with explicit configuration and an
/// optional custom scan pattern.
pub fn replace_placeholders_with(
    template: &TemplateNode,
    data: &DataDictionary,
    config: ResolveConfig,
    pattern: Option<&Regex>,
) -> TemplateNode {
    let mut resolver = Resolver::new(data).with_config(config);
    if let Some(pattern) = pattern {
        resolver = resolver.with_pattern(pattern);
    }
    resolver.resolve(template)
}
