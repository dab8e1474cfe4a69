//! エラーケースのパーサーテスト

use super::*;
use test_case::test_case;
use typespec::error::ParserError;

#[test]
fn test_empty_input() {
    let error = assert_parse_error("");
    assert_eq!(error, TypeSpecError::Rejected(ParserError::EmptyInput));
    assert_eq!(error.to_string(), "No type specified.");
}

#[test]
fn test_whitespace_only_is_end_of_input() {
    let error = assert_parse_error("   ");
    assert_eq!(
        error.to_string(),
        "Unexpected end of input. - Remaining tokens: [] - Initial input: '   '"
    );
}

#[test]
fn test_function_type_is_rejected_before_parsing() {
    let error = assert_parse_error("A -> B");
    assert!(matches!(
        error,
        TypeSpecError::Rejected(ParserError::UnsupportedFunctionType { .. })
    ));
    assert_eq!(
        error.to_string(),
        "Function types are not supported. To validate that something is a function, you may use 'Function'."
    );
}

#[test]
fn test_arrow_anywhere_is_rejected() {
    // 構文エラーより関数型の検出が優先される
    let error = assert_parse_error("[] | (x -> y)");
    assert!(matches!(
        error.error(),
        ParserError::UnsupportedFunctionType { .. }
    ));
}

#[test]
fn test_missing_comment_label() {
    let error = assert_parse_error(":: Number");
    assert_eq!(
        error.to_string(),
        r#"No comment before comment separator '::' found. - Remaining tokens: ["::","Number"] - Initial input: ':: Number'"#
    );
}

#[test]
fn test_empty_array() {
    let error = assert_parse_error("[]");
    assert!(matches!(
        error.error(),
        ParserError::EmptyArrayElementType { .. }
    ));
    assert_eq!(
        error.to_string(),
        r#"Must specify type of Array - eg. [Type], got [] instead. - Remaining tokens: ["]"] - Initial input: '[]'"#
    );
}

#[test]
fn test_empty_tuple() {
    let error = assert_parse_error("()");
    assert!(matches!(error.error(), ParserError::EmptyTuple { .. }));
    assert_eq!(error.remaining(), &[")".to_string()]);
}

#[test]
fn test_unexpected_character_context() {
    let error = assert_parse_error("[Number, String]");
    assert_eq!(
        error.to_string(),
        r#"Expected ']', got ',' instead. - Remaining tokens: [",","String","]"] - Initial input: '[Number, String]'"#
    );
}

#[test_case("{ 1: Number }" ; "digit field name is text")]
#[test_case("Maybe [String]" ; "maybe before anonymous array")]
fn test_accepted_edge_cases(source: &str) {
    assert_parse_success(source);
}

#[test_case("[" => "Unexpected end of input." ; "unclosed bracket")]
#[test_case("(A" => "Unexpected end of input." ; "unclosed tuple")]
#[test_case("{ a: }" => "Unexpected character: }" ; "field without type")]
#[test_case("{ [: A }" => "Expected text, got '[' instead." ; "field name must be text")]
#[test_case("{ a A }" => "Expected ':', got 'A' instead." ; "missing colon")]
#[test_case("| A" => "Unexpected character: |" ; "leading pipe")]
#[test_case("<A>" => "Unexpected character: <" ; "angle bracket")]
#[test_case("{ a: A, ..., b: B }" => "Expected '}', got ',' instead." ; "field after ellipsis")]
fn test_error_messages(source: &str) -> String {
    assert_parse_error(source).error().to_string()
}

#[test]
fn test_error_span_points_at_token() {
    let error = assert_parse_error("(A, <)");
    assert_eq!(error.span(), Some(typespec::ast::Span::new(4, 5)));
}
