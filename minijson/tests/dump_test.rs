// SPDX-License-Identifier: Apache-2.0

//! Serialization format and round-trip laws.

use std::collections::BTreeMap;

use minijson::{parse, JsonValue};

#[test]
fn scalars_serialize_directly() {
    assert_eq!(JsonValue::Null.dump("  ", 0), "null");
    assert_eq!(JsonValue::Bool(true).dump("  ", 0), "true");
    assert_eq!(JsonValue::Bool(false).dump("  ", 0), "false");
    assert_eq!(JsonValue::Number(12.0).dump("  ", 0), "12");
    assert_eq!(JsonValue::Number(2.5).dump("  ", 0), "2.5");
    assert_eq!(JsonValue::from("hello").dump("  ", 0), "\"hello\"");
}

#[test]
fn empty_containers_keep_the_multiline_shape() {
    assert_eq!(JsonValue::from(vec![]).dump("  ", 0), "[\n]");
    assert_eq!(JsonValue::from(BTreeMap::new()).dump("  ", 0), "{\n}");
}

#[test]
fn arrays_render_one_element_per_line() {
    let array = JsonValue::from(vec![JsonValue::Number(1.0), JsonValue::Number(2.0)]);
    assert_eq!(array.dump("  ", 0), "[\n  1,\n  2\n]");
}

#[test]
fn object_members_come_out_in_key_order() {
    let doc = parse(r#"{"b": 1, "a": 2}"#).unwrap();
    assert_eq!(doc.dump("  ", 0), "{\n  \"a\": 2,\n  \"b\": 1\n}");
}

#[test]
fn nesting_indents_one_unit_per_level() {
    let doc = parse(r#"{"a": 12, "arr": [1, 2, 3]}"#).unwrap();
    let expected = "{\n  \"a\": 12,\n  \"arr\": [\n    1,\n    2,\n    3\n  ]\n}";
    assert_eq!(doc.dump("  ", 0), expected);
}

#[test]
fn indent_level_offsets_the_whole_body() {
    let array = JsonValue::from(vec![JsonValue::Number(1.0)]);
    assert_eq!(array.dump("  ", 2), "[\n      1\n    ]");
}

#[test]
fn dump_is_idempotent() {
    let doc = parse(r#"{"a": [1, {"b": null}], "c": "text"}"#).unwrap();
    assert_eq!(doc.dump("    ", 0), doc.dump("    ", 0));
}

#[test]
fn dump_then_parse_rebuilds_the_tree() {
    // Strings free of quotes, backslashes and control characters survive
    // the quote-without-escaping serialization.
    let original = parse(r#"{"b": [1, 2.5, true, null], "a": {"inner": "text"}}"#).unwrap();
    let reparsed = parse(&original.dump("  ", 0)).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn dump_of_a_programmatic_tree_matches_its_parsed_twin() {
    let members = BTreeMap::from([
        ("a".to_string(), JsonValue::Number(12.0)),
        (
            "arr".to_string(),
            JsonValue::from(vec![
                JsonValue::Number(1.0),
                JsonValue::Number(2.0),
                JsonValue::Number(3.0),
            ]),
        ),
    ]);
    let built = JsonValue::from(members);
    let parsed = parse(r#"{"arr": [1, 2, 3], "a": 12}"#).unwrap();
    // Key order is the map's, regardless of construction order.
    assert_eq!(built.dump("  ", 0), parsed.dump("  ", 0));
    assert_eq!(built, parsed);
}

#[test]
fn invalid_has_no_textual_form() {
    let doc = parse("{}").unwrap();
    assert_eq!(doc["missing"].dump("  ", 0), "");
}
