//! Lexer driver on top of the logos-generated scanner

use logos::{Lexer as LogosLexer, Logos, Span};

use super::Token;

/// A token together with its byte range in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWithPosition {
    pub token: Token,
    pub span: Span,
}

/// Lexer for type specifications
pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
        }
    }

    /// Collect every remaining token
    pub fn collect_tokens(self) -> Vec<TokenWithPosition> {
        self.collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = TokenWithPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();

        let token = match result {
            Ok(token) => token,
            // The single-character fallback accepts anything that is not
            // whitespace, so the scanner has nothing left to reject. Keep the
            // slice rather than dropping input if that ever changes.
            Err(_) => Token::Other(self.inner.slice().to_owned()),
        };

        Some(TokenWithPosition { token, span })
    }
}

/// Tokenize a whole specification
pub fn tokenize(input: &str) -> Vec<TokenWithPosition> {
    Lexer::new(input).collect_tokens()
}

/// Source texts of the given tokens, in order
pub fn token_texts(tokens: &[TokenWithPosition]) -> Vec<String> {
    tokens.iter().map(|t| t.token.to_string()).collect()
}

/// Debug helper: one `token @ span` line per token
pub fn format_tokens(tokens: &[TokenWithPosition]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:?} @ {:?}", t.token, t.span))
        .collect::<Vec<_>>()
        .join("\n")
}
