//! 型と和型の解析

use std::collections::HashSet;

use crate::ast::*;
use crate::error::Expected;
use crate::lexer::Token;

use super::{ParseResult, Parser};

/// `Maybe T` の省略形を示す識別子
const MAYBE: &str = "Maybe";
/// `Maybe` が先頭に追加する型
const MAYBE_EXPANSION: [&str; 2] = ["Undefined", "Null"];

impl Parser {
    /// `|` で区切られた和型を解析
    ///
    /// 重複除去は名前だけで判定します。構造を持たない型だけが既出集合に
    /// 登録されるため、構造付きの型は先行する同名の素の型に抑制されますが、
    /// 自身は後続の同名の型を抑制しません。
    pub(super) fn parse_types(&mut self) -> ParseResult<Types> {
        self.expect_any()?;

        // 先頭の `Label ::` はコメントとして読み飛ばす
        if self.peek(1) == Some(&Token::DoubleColon) {
            self.advance();
            self.advance();
        }

        let mut types = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        if matches!(self.expect_any()?, Token::Identifier(name) if name == MAYBE) {
            self.advance();
            for name in MAYBE_EXPANSION {
                types.push(TypeDescriptor::named(name));
                seen.insert(name.to_string());
            }
        }

        loop {
            let descriptor = self.parse_single_type()?;

            let suppressed = descriptor
                .name()
                .is_some_and(|name| seen.contains(name));
            if !descriptor.is_structured() {
                if let Some(name) = descriptor.name() {
                    seen.insert(name.to_string());
                }
            }
            if !suppressed {
                types.push(descriptor);
            }

            if !self.match_token(&Token::Pipe) {
                break;
            }
        }

        Ok(types)
    }

    /// 単一の型を解析
    pub(super) fn parse_single_type(&mut self) -> ParseResult<TypeDescriptor> {
        match self.expect_any()? {
            Token::Star | Token::Identifier(_) => {
                let name = self.expect_any()?.to_string();
                self.advance();

                match self.try_parse_structure()? {
                    Some(structure) => Ok(structure.with_name(name)),
                    None => Ok(TypeDescriptor::named(name)),
                }
            }
            _ => match self.try_parse_structure()? {
                Some(structure) => Ok(structure),
                None => Err(self.unexpected(Expected::Type)),
            },
        }
    }
}
