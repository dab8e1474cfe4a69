//! 和型と重複除去のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_union_order() {
    assert_eq!(
        names(&assert_parse_success("String | Number | Boolean")),
        vec![Some("String"), Some("Number"), Some("Boolean")]
    );
}

#[test]
fn test_bare_duplicate_collapses() {
    assert_eq!(assert_parse_success("String | String"), vec![named("String")]);
}

#[test]
fn test_maybe_suppresses_null_and_undefined() {
    assert_eq!(
        names(&assert_parse_success("Maybe Null | Undefined | String")),
        vec![Some("Undefined"), Some("Null"), Some("String")]
    );
}

#[test]
fn test_structured_after_same_bare_name_is_dropped() {
    assert_eq!(
        assert_parse_success("String | String[Number]"),
        vec![named("String")]
    );
}

#[test]
fn test_structured_does_not_suppress_later_names() {
    let types = assert_parse_success("Array[Number] | Array | Array[String]");
    // 素の `Array` が登録された後の `Array[String]` だけが落ちる
    assert_eq!(types.len(), 2);
    assert!(types[0].is_structured());
    assert_eq!(types[1], named("Array"));
}

#[test]
fn test_two_structures_with_one_name() {
    let types = assert_parse_success("Object{a: A} | Object{b: B}");
    assert_eq!(names(&types), vec![Some("Object"), Some("Object")]);
}

#[test]
fn test_dedup_is_per_union() {
    // 入れ子の和型は独立した既出集合を持つ
    let types = assert_parse_success("Number | [Number | Number]");
    assert_eq!(types.len(), 2);
    assert_eq!(
        types[1].structure,
        Some(Structure::Array {
            of: vec![named("Number")]
        })
    );
}

#[test]
fn test_wildcard_dedup() {
    assert_eq!(assert_parse_success("* | *"), vec![TypeDescriptor::wildcard()]);
}
