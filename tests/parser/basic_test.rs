//! 基本的な型仕様のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_single_name() {
    assert_eq!(assert_parse_success("Number"), vec![named("Number")]);
}

#[test]
fn test_surrounding_whitespace() {
    assert_eq!(assert_parse_success("   Number \n"), vec![named("Number")]);
}

#[test]
fn test_wildcard() {
    let types = assert_parse_success("*");
    assert_eq!(types.len(), 1);
    assert!(types[0].is_wildcard());
    assert!(!types[0].is_structured());
}

#[test]
fn test_maybe_shorthand() {
    assert_eq!(
        assert_parse_success("Maybe String"),
        vec![named("Undefined"), named("Null"), named("String")]
    );
}

#[test]
fn test_maybe_union() {
    assert_eq!(
        names(&assert_parse_success("Maybe String | Number")),
        vec![Some("Undefined"), Some("Null"), Some("String"), Some("Number")]
    );
}

#[test]
fn test_maybe_only_counts_at_the_start() {
    // 先頭以外の `Maybe` はただの型名
    assert_eq!(
        assert_parse_success("String | Maybe"),
        vec![named("String"), named("Maybe")]
    );
}

#[test]
fn test_comment_prefix() {
    assert_eq!(
        assert_parse_success("User id :: Number"),
        // `User` はラベルではなく型として解析され、`id ::` 以降は残る
        vec![named("User")]
    );
    assert_eq!(
        assert_parse_success("Identifier :: Number | String"),
        vec![named("Number"), named("String")]
    );
}

#[test]
fn test_comment_inside_fields() {
    let types = assert_parse_success("{ id: Key :: Number }");
    let Some(Structure::Fields { of, subset }) = &types[0].structure else {
        panic!("Expected fields");
    };
    assert!(!subset);
    assert_eq!(of["id"], vec![named("Number")]);
}

#[test]
fn test_trailing_tokens_are_ignored() {
    assert_eq!(assert_parse_success("Number ]"), vec![named("Number")]);
}

#[test]
fn test_json_output_shape() {
    let types = assert_parse_success("Maybe Array[Number]");
    let json = serde_json::to_value(&types).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "type": "Undefined" },
            { "type": "Null" },
            { "type": "Array", "structure": "array", "of": [{ "type": "Number" }] }
        ])
    );
}
