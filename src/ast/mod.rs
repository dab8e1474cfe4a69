//! Abstract Syntax Tree (AST) definitions for type specifications.
//!
//! A parsed specification is a union: an ordered list of [`TypeDescriptor`]s,
//! any one of which a value may satisfy. Descriptors nest through their
//! optional [`Structure`].

mod printer;
mod types;

use serde::{Deserialize, Serialize};

pub use printer::{format_types, TypeUnion};
pub use types::{FieldMap, Structure, TypeDescriptor, Types, WILDCARD};

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
