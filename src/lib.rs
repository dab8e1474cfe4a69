//! Type Specification Parser Library
//!
//! This library parses compact type-specification strings such as
//! `Maybe [Number]`, `(String, Number)` or `{ name: String, ... }` into a
//! union of type descriptors that a validator can walk.

pub mod ast;
pub mod checker;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use ast::{format_types, Structure, TypeDescriptor, TypeUnion, Types};
pub use checker::{CheckSession, CheckedSpec};
pub use error::{CheckError, ErrorCollector, ParserError, TypeSpecError};
pub use lexer::{Lexer, Token, TokenWithPosition};
pub use parser::{parse_type, parse_type_prefix, ParseError, ParseResult, Parser};
