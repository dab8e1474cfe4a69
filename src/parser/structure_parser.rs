//! 配列・タプル・フィールド構造の解析

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::Token;

use super::parser_impl::MAX_NESTING_DEPTH;
use super::{ParseResult, Parser};

impl Parser {
    /// 次のトークンが構造の開始なら解析する
    ///
    /// 入れ子が `MAX_NESTING_DEPTH` を超える場合はエラーになります。
    pub(super) fn try_parse_structure(&mut self) -> ParseResult<Option<TypeDescriptor>> {
        if !matches!(
            self.current_token(),
            Some(Token::LeftBracket | Token::LeftParen | Token::LeftBrace)
        ) {
            return Ok(None);
        }

        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParserError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                span: self.current_span(),
            });
        }

        self.depth += 1;
        let structure = match self.current_token() {
            Some(Token::LeftBracket) => self.parse_array(),
            Some(Token::LeftParen) => self.parse_tuple(),
            _ => self.parse_fields(),
        };
        self.depth -= 1;

        Ok(Some(TypeDescriptor::anonymous(structure?)))
    }

    /// 配列型を解析（例：`[Number]`, `[String | Null]`）
    fn parse_array(&mut self) -> ParseResult<Structure> {
        let start = self.current_span();
        self.expect(Token::LeftBracket)?;

        if self.check_next(&Token::RightBracket)? {
            return Err(ParserError::EmptyArrayElementType {
                span: Span::new(start.start, self.current_span().end),
            });
        }

        let of = self.parse_types()?;
        self.expect(Token::RightBracket)?;
        Ok(Structure::Array { of })
    }

    /// タプル型を解析（例：`(String, Number)`）
    ///
    /// 要素間のカンマは省略可能です。
    fn parse_tuple(&mut self) -> ParseResult<Structure> {
        let start = self.current_span();
        self.expect(Token::LeftParen)?;

        if self.check_next(&Token::RightParen)? {
            return Err(ParserError::EmptyTuple {
                span: Span::new(start.start, self.current_span().end),
            });
        }

        let mut of = Vec::new();
        loop {
            of.push(self.parse_types()?);
            self.match_token(&Token::Comma);
            if self.check_next(&Token::RightParen)? {
                break;
            }
        }

        self.expect(Token::RightParen)?;
        Ok(Structure::Tuple { of })
    }

    /// フィールド構造を解析（例：`{ name: String, ... }`）
    ///
    /// `...` が現れた時点でフィールドの列は終わり、部分一致（subset）になります。
    /// 同じフィールド名が再度現れた場合は、元の位置のまま型を上書きします。
    fn parse_fields(&mut self) -> ParseResult<Structure> {
        self.expect(Token::LeftBrace)?;

        let mut of = FieldMap::new();
        let mut subset = false;
        loop {
            if self.match_token(&Token::Ellipsis) {
                subset = true;
                break;
            }

            let (key, types) = self.parse_field()?;
            of.insert(key, types);

            self.match_token(&Token::Comma);
            if self.check_next(&Token::RightBrace)? {
                break;
            }
        }

        self.expect(Token::RightBrace)?;
        Ok(Structure::Fields { of, subset })
    }

    /// `name: Types` を解析
    fn parse_field(&mut self) -> ParseResult<(String, Types)> {
        let key = self.expect_identifier()?;
        self.expect(Token::Colon)?;
        let types = self.parse_types()?;
        Ok((key, types))
    }
}
