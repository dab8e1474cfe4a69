//! メインパーサー構造とユーティリティ

use crate::ast::*;
use crate::error::{Expected, ParserError};
use crate::lexer::{Token, TokenWithPosition};

use super::{ParseError, ParseResult};

/// 構造（`[]`・`()`・`{}`）を入れ子にできる最大の深さ
pub const MAX_NESTING_DEPTH: usize = 128;

/// 型仕様パーサー
///
/// トークン列は変更せず、カーソル位置だけを進めます。
pub struct Parser {
    pub(super) tokens: Vec<TokenWithPosition>,
    pub(super) current: usize,
    /// 現在解析中の構造の入れ子の深さ
    pub(super) depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPosition>) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// 最外の和型を解析
    pub fn parse(&mut self) -> ParseResult<Types> {
        // ラベルの無い `::` は最外でのみエラーとする
        if *self.expect_any()? == Token::DoubleColon {
            return Err(ParserError::MissingCommentSeparator {
                span: self.current_span(),
            });
        }
        self.parse_types()
    }

    /// 未消費のトークン
    pub fn remaining(&self) -> &[TokenWithPosition] {
        &self.tokens[self.current.min(self.tokens.len())..]
    }

    /// パーサーを消費して未消費のトークンを返す
    pub fn into_remaining(mut self) -> Vec<TokenWithPosition> {
        let current = self.current.min(self.tokens.len());
        self.tokens.split_off(current)
    }

    // ==================== ユーティリティメソッド ====================

    /// 現在のトークンを取得
    pub(super) fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current).map(|t| &t.token)
    }

    /// 特定のオフセット先のトークンを取得
    pub(super) fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.current + offset).map(|t| &t.token)
    }

    /// 現在のスパンを取得（終端では最後のトークンの直後）
    pub(super) fn current_span(&self) -> Span {
        match self.tokens.get(self.current) {
            Some(t) => t.span.clone().into(),
            None => {
                let end = self.tokens.last().map(|t| t.span.end).unwrap_or(0);
                Span::new(end, end)
            }
        }
    }

    /// 次のトークンに進む
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    /// 終端に到達したかチェック
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// 特定のトークンにマッチしたら進む
    pub(super) fn match_token(&mut self, token: &Token) -> bool {
        if self.current_token() == Some(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 現在のトークンを要求（終端ならエラー）
    pub(super) fn expect_any(&self) -> ParseResult<&Token> {
        self.current_token()
            .ok_or_else(|| ParserError::UnexpectedEof {
                span: self.current_span(),
            })
    }

    /// 現在のトークンが指定のものか（終端ならエラー）
    pub(super) fn check_next(&self, token: &Token) -> ParseResult<bool> {
        Ok(self.expect_any()? == token)
    }

    /// 特定のトークンを期待
    pub(super) fn expect(&mut self, token: Token) -> ParseResult<()> {
        let found = self.expect_any()?;
        if *found == token {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(Expected::Literal(token)))
        }
    }

    /// 識別子を期待
    pub(super) fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.expect_any()? {
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(Expected::Text)),
        }
    }

    /// 予期しないトークンエラーを作成
    pub(super) fn unexpected(&self, expected: Expected) -> ParseError {
        match self.current_token() {
            Some(token) => ParserError::UnexpectedToken {
                expected,
                found: token.to_string(),
                span: self.current_span(),
            },
            None => ParserError::UnexpectedEof {
                span: self.current_span(),
            },
        }
    }
}
