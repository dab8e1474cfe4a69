//! パーサーモジュール
//!
//! このモジュールはトークン列を型記述子のリスト（AST）に解析する責任を持ちます。
//! 先読み1トークンの再帰下降構文解析を使用します。
//!
//! ## 文法
//!
//! ```text
//! Types     → (Label '::')? 'Maybe'? Type ('|' Type)*
//! Type      → (Identifier | '*') Structure? | Structure
//! Structure → Array | Tuple | Fields
//! Array     → '[' Types ']'
//! Tuple     → '(' Types (','? Types)* ')'
//! Fields    → '{' Field (','? Field)* '...'? '}'
//! Field     → Identifier ':' Types
//! ```
//!
//! `Maybe T` は `Undefined | Null | T` の省略形です。
//! 型名は不透明な識別子としてそのまま保持され、名前解決は行いません。

mod parser_impl;
mod structure_parser;
mod type_parser;

use crate::ast::Types;
use crate::error::{ParserError, TypeSpecError};
use crate::lexer::{token_texts, tokenize, Token, TokenWithPosition};

pub use parser_impl::{Parser, MAX_NESTING_DEPTH};

pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;

/// 型仕様文字列を解析する
///
/// 失敗した場合、構文解析中のエラーには未消費のトークンと元の入力が付加されます。
/// 最外の和型の後に残ったトークンは無視されます。
pub fn parse_type(input: &str) -> Result<Types, TypeSpecError> {
    parse_type_prefix(input).map(|(types, _)| types)
}

/// 型仕様文字列を解析し、読み残したトークンも返す
pub fn parse_type_prefix(input: &str) -> Result<(Types, Vec<TokenWithPosition>), TypeSpecError> {
    if input.is_empty() {
        return Err(TypeSpecError::Rejected(ParserError::EmptyInput));
    }

    let tokens = tokenize(input);
    log::trace!("tokenized {:?} into {} tokens", input, tokens.len());

    // 関数型は構造の解析より前に拒否する
    if let Some(arrow) = tokens.iter().find(|t| t.token == Token::Arrow) {
        return Err(TypeSpecError::Rejected(
            ParserError::UnsupportedFunctionType {
                span: arrow.span.clone().into(),
            },
        ));
    }

    let mut parser = Parser::new(tokens);
    match parser.parse() {
        Ok(types) => {
            let rest = parser.into_remaining();
            if !rest.is_empty() {
                log::debug!(
                    "ignoring {} trailing token(s) in {:?}: {:?}",
                    rest.len(),
                    input,
                    token_texts(&rest)
                );
            }
            Ok((types, rest))
        }
        Err(error) => {
            log::debug!("failed to parse {:?}: {}", input, error);
            Err(TypeSpecError::Parse {
                error,
                remaining: token_texts(parser.remaining()),
                input: input.to_string(),
            })
        }
    }
}
