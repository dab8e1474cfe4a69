//! Canonical text form of a parsed specification.
//!
//! The output re-parses to an equal AST. Comments, `Maybe` shorthands and the
//! original whitespace are not reproduced: `Maybe String` prints as
//! `Undefined | Null | String`.

use std::fmt;

use super::types::{Structure, TypeDescriptor};

/// Display adapter joining a union with ` | `
pub struct TypeUnion<'a>(pub &'a [TypeDescriptor]);

impl fmt::Display for TypeUnion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, descriptor) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", descriptor)?;
        }
        Ok(())
    }
}

/// Canonical text of a union
pub fn format_types(types: &[TypeDescriptor]) -> String {
    TypeUnion(types).to_string()
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            f.write_str(name)?;
        }
        if let Some(structure) = &self.structure {
            write!(f, "{}", structure)?;
        }
        Ok(())
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Array { of } => write!(f, "[{}]", TypeUnion(of)),
            Structure::Tuple { of } => {
                f.write_str("(")?;
                for (i, slot) in of.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", TypeUnion(slot))?;
                }
                f.write_str(")")
            }
            Structure::Fields { of, subset } => {
                f.write_str("{")?;
                for (i, (key, types)) in of.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, TypeUnion(types))?;
                }
                if *subset {
                    if !of.is_empty() {
                        f.write_str(", ")?;
                    }
                    f.write_str("...")?;
                }
                f.write_str("}")
            }
        }
    }
}
