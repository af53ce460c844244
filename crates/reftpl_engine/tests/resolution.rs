/*
SPDX-License-Identifier: MPL-2.0
*/

mod common;
use common::*;

use reftpl_core::{FieldValue, ResolveConfig, TemplateNode};
use reftpl_engine::{replace_placeholders, replace_placeholders_with, Resolver};

#[test]
fn test_mid_sentence_keeps_value_casing_for_name() {
    let data = dict(&[("name", "john")]);
    let resolver = Resolver::new(&data);
    assert_eq!(resolver.resolve_str("Hello {name}."), "Hello john.");
}

#[test]
fn test_sentence_initial_capitalizes() {
    let data = dict(&[("name", "john")]);
    let resolver = Resolver::new(&data);
    assert_eq!(resolver.resolve_str("{name} said hi."), "John said hi.");
}

#[test]
fn test_delimiter_splice() {
    let data = dict(&[("list", "a,b,c")]);
    let resolver = Resolver::new(&data);
    assert_eq!(resolver.resolve_str("got {list[,:1]}"), "got b");
}

#[test]
fn test_char_range_splice() {
    let data = dict(&[("code", "AB-1234")]);
    let resolver = Resolver::new(&data);
    assert_eq!(resolver.resolve_str("ref {code[-4..]}"), "ref 1234");
    assert_eq!(resolver.resolve_str("{code[0..2]} series"), "AB series");
}

#[test]
fn test_operation_logic_on_resolved_value() {
    let data = dict(&[("pronoun", "They")]);
    let resolver = Resolver::new(&data);
    assert_eq!(
        resolver.resolve_str("{pronoun === 'They' ? 'plural' : 'singular'} form"),
        "Plural form"
    );
}

#[test]
fn test_logic_fallback_keeps_value() {
    // Malformed logic degrades to the resolved value itself.
    let data = dict(&[("name", "ada")]);
    let resolver = Resolver::new(&data);
    assert_eq!(resolver.resolve_str("by {name === (}"), "by ada");
}

#[test]
fn test_full_resolution_is_idempotent() {
    let data = dict(&[("a", "left"), ("b", "right")]);
    let resolver = Resolver::new(&data);
    let once = resolver.resolve_str("{a} then {b}, done.");
    let twice = resolver.resolve_str(&once);
    assert_eq!(once, twice);
    assert_eq!(once, "Left then right, done.");
}

#[test]
fn test_map_template_resolves_per_key() {
    let data = dict(&[("name", "ada"), ("city", "Paris")]);
    let template: TemplateNode = serde_yaml::from_str(
        r#"
greeting: "Hello {name}."
location: "in {city}"
count: 3
"#,
    )
    .unwrap();
    let resolved = replace_placeholders(&template, &data);
    let TemplateNode::Map(map) = resolved else {
        panic!("expected map");
    };
    assert_eq!(map["greeting"].as_text(), Some("Hello ada."));
    assert_eq!(map["location"].as_text(), Some("in Paris"));
    assert_eq!(map["count"], TemplateNode::Number(3.0));
}

#[test]
fn test_max_depth_stops_recursion() {
    let data = dict(&[("x", "deep")]);
    let template: TemplateNode = serde_yaml::from_str(
        r#"
top: "{x}"
nested:
  inner: "{x}"
"#,
    )
    .unwrap();
    let config = ResolveConfig {
        max_depth: Some(1),
        ..Default::default()
    };
    let resolved = replace_placeholders_with(&template, &data, config, None);
    let TemplateNode::Map(map) = resolved else {
        panic!("expected map");
    };
    // depth 1 keys resolve, the depth-2 leaf is returned raw
    assert_eq!(map["top"].as_text(), Some("Deep"));
    let TemplateNode::Map(nested) = &map["nested"] else {
        panic!("expected nested map");
    };
    assert_eq!(nested["inner"].as_text(), Some("{x}"));
}

#[test]
fn test_unresolved_field_empty_non_strict() {
    let data = dict(&[]);
    let resolver = Resolver::new(&data);
    assert_eq!(resolver.resolve_str("a {gone} z"), "a  z");
}

#[test]
fn test_numeric_and_bool_field_values() {
    let mut data = dict(&[]);
    data.insert("count".to_string(), FieldValue::Number(7.0));
    data.insert("flag".to_string(), FieldValue::Bool(true));
    let resolver = Resolver::new(&data);
    assert_eq!(resolver.resolve_str("n = {count}, f = {flag}"), "n = 7, f = true");
}

#[test]
fn test_today_pseudo_field_resolves() {
    let data = dict(&[]);
    let resolver = Resolver::new(&data);
    let out = resolver.resolve_str("dated {TODAY}");
    assert_ne!(out, "dated ");
    assert!(!out.contains('{'));
    // default format MM/DD/YYYY
    assert_eq!(out.len(), "dated ".len() + 10);
}

#[test]
fn test_data_shadows_pseudo_field() {
    let data = dict(&[("TODAY", "some day")]);
    let resolver = Resolver::new(&data);
    assert_eq!(resolver.resolve_str("due {TODAY}"), "due some day");
}

#[test]
fn test_multiple_occurrences_replace_in_one_pass() {
    let data = dict(&[("x", "ab"), ("y", "cde")]);
    let resolver = Resolver::new(&data);
    // Later spans substitute first, so earlier offsets stay valid even
    // though replacements change the string length.
    assert_eq!(
        resolver.resolve_str("{x}-{y}-{x[0..1]}-{y[1..]}"),
        "Ab-cde-a-de"
    );
}
