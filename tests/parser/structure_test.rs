//! 構造（配列・タプル・フィールド）のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;

fn fields(entries: &[(&str, Types)], subset: bool) -> Structure {
    let mut of = FieldMap::new();
    for (key, types) in entries {
        of.insert(key.to_string(), types.clone());
    }
    Structure::Fields { of, subset }
}

#[test]
fn test_anonymous_array() {
    let types = assert_parse_success("[Number]");
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name(), None);
    assert_eq!(
        types[0].structure,
        Some(Structure::Array {
            of: vec![named("Number")]
        })
    );
}

#[test]
fn test_named_array() {
    let types = assert_parse_success("Array[Number]");
    assert_eq!(types[0].name(), Some("Array"));
    assert_eq!(types[0].structure.as_ref().map(|s| s.kind()), Some("array"));
}

#[test]
fn test_wildcard_with_structure() {
    let types = assert_parse_success("*[String]");
    assert!(types[0].is_wildcard());
    assert!(types[0].is_structured());
}

#[test]
fn test_two_slot_tuple() {
    let types = assert_parse_success("(String, Number)");
    assert_eq!(
        types,
        vec![TypeDescriptor::anonymous(Structure::Tuple {
            of: vec![vec![named("String")], vec![named("Number")]]
        })]
    );
}

#[test]
fn test_tuple_slot_unions() {
    let types = assert_parse_success("(Maybe String, Number | Boolean)");
    let Some(Structure::Tuple { of }) = &types[0].structure else {
        panic!("Expected tuple");
    };
    assert_eq!(of.len(), 2);
    assert_eq!(names(&of[0]), vec![Some("Undefined"), Some("Null"), Some("String")]);
    assert_eq!(names(&of[1]), vec![Some("Number"), Some("Boolean")]);
}

#[test]
fn test_closed_record() {
    let types = assert_parse_success("{ name: String, age: Number }");
    assert_eq!(
        types,
        vec![TypeDescriptor::anonymous(fields(
            &[
                ("name", vec![named("String")]),
                ("age", vec![named("Number")])
            ],
            false
        ))]
    );
}

#[test]
fn test_open_record() {
    let types = assert_parse_success("{ name: String, ... }");
    assert_eq!(
        types,
        vec![TypeDescriptor::anonymous(fields(
            &[("name", vec![named("String")])],
            true
        ))]
    );
}

#[test]
fn test_record_without_commas() {
    let types = assert_parse_success("Object{a: A b: B}");
    assert_eq!(
        types,
        vec![TypeDescriptor::anonymous(fields(
            &[("a", vec![named("A")]), ("b", vec![named("B")])],
            false
        ))
        .with_name("Object")]
    );
}

#[test]
fn test_record_field_order_is_preserved() {
    let types = assert_parse_success("{ z: A, a: B, m: C }");
    let Some(Structure::Fields { of, .. }) = &types[0].structure else {
        panic!("Expected fields");
    };
    assert_eq!(of.keys().cloned().collect::<Vec<_>>(), vec!["z", "a", "m"]);
}

#[test]
fn test_deep_nesting() {
    let types = assert_parse_success("Maybe { tags: [String], point: (Number, Number), meta: {...} }");
    assert_eq!(types.len(), 3);

    let Some(Structure::Fields { of, subset }) = &types[2].structure else {
        panic!("Expected fields");
    };
    assert!(!subset);
    assert!(matches!(of["tags"][0].structure, Some(Structure::Array { .. })));
    assert!(matches!(of["point"][0].structure, Some(Structure::Tuple { .. })));
    assert_eq!(
        of["meta"][0].structure,
        Some(fields(&[], true))
    );
}
