//! Lexical analysis module for type specifications.
//!
//! A specification is split into a flat stream of tokens by a single greedy
//! left-to-right scan. Multi-character operators (`...`, `::`, `->`) win over
//! identifier runs, which win over the single-character fallback. Whitespace
//! is skipped and never produces a token.

mod lexer;

use logos::Logos;
use std::fmt;

pub use lexer::{format_tokens, token_texts, tokenize, Lexer, TokenWithPosition};

/// Token types for the type-specification grammar
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
// JavaScript's `\s` class: includes U+FEFF, excludes U+0085
#[logos(skip r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+")]
pub enum Token {
    // Multi-character operators
    #[token("...")]
    Ellipsis,
    #[token("::")]
    DoubleColon,
    #[token("->")]
    Arrow,

    // `$`, ASCII letters, digits and underscore. Type names and field names share this class.
    #[regex(r"[$A-Za-z0-9_]+", |lex| lex.slice().to_owned(), priority = 3)]
    Identifier(String),

    // Delimiters
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("|")]
    Pipe,
    #[token("*")]
    Star,

    // Any other single non-whitespace character. Punctuation above wins.
    #[regex(
        r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]",
        |lex| lex.slice().to_owned(),
        priority = 1
    )]
    Other(String),
}

impl Token {
    /// The exact source text this token was scanned from
    pub fn as_str(&self) -> &str {
        match self {
            Token::Ellipsis => "...",
            Token::DoubleColon => "::",
            Token::Arrow => "->",
            Token::Identifier(s) | Token::Other(s) => s.as_str(),
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Pipe => "|",
            Token::Star => "*",
        }
    }

    /// Whether this token can be used as a type name or a field name
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
