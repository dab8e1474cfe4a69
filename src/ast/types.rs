//! Type descriptors

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name that matches any type name
pub const WILDCARD: &str = "*";

/// A union of descriptors; a value must satisfy at least one of them
pub type Types = Vec<TypeDescriptor>;

/// Field name to per-field union, in declaration order
pub type FieldMap = IndexMap<String, Types>;

/// One alternative of a union.
///
/// Serializes to the object shape existing validators of this grammar read:
/// the name goes under `type` and is omitted for anonymous structures, while
/// `structure`, `of` and `subset` sit beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub structure: Option<Structure>,
}

/// Shape constraint attached to a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "structure", rename_all = "lowercase")]
pub enum Structure {
    /// `[A | B]`: every element matches the union
    Array { of: Types },
    /// `(A, B)`: one union per position
    Tuple { of: Vec<Types> },
    /// `{a: A, ...}`: per-field unions; `subset` allows unlisted fields
    Fields { of: FieldMap, subset: bool },
}

impl TypeDescriptor {
    /// A bare named type such as `Number`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            structure: None,
        }
    }

    /// The `*` wildcard
    pub fn wildcard() -> Self {
        Self::named(WILDCARD)
    }

    /// A structure with no leading name, such as `[Number]`
    pub fn anonymous(structure: Structure) -> Self {
        Self {
            name: None,
            structure: Some(structure),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_structured(&self) -> bool {
        self.structure.is_some()
    }

    pub fn is_wildcard(&self) -> bool {
        self.name() == Some(WILDCARD)
    }
}

impl Structure {
    /// Tag used in the serialized form
    pub fn kind(&self) -> &'static str {
        match self {
            Structure::Array { .. } => "array",
            Structure::Tuple { .. } => "tuple",
            Structure::Fields { .. } => "fields",
        }
    }
}
