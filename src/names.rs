//! Name table decoding
//!
//! Packages store object names as [`MappedName`] references into one of two
//! string tables: the global table shared by every package in a container, or
//! the package's own local table. A name also carries an instance number that
//! renders as a `_N` suffix.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::resolve::{ResolveResult, name_out_of_range};

/// Reference to an entry of the global or local name table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappedName {
    pub index: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub global: bool,
}

impl MappedName {
    pub const fn local(index: u32) -> Self {
        Self {
            index,
            number: 0,
            global: false,
        }
    }

    pub const fn global(index: u32) -> Self {
        Self {
            index,
            number: 0,
            global: true,
        }
    }

    #[must_use]
    pub const fn with_number(self, number: u32) -> Self {
        Self { number, ..self }
    }
}

/// Decoded object name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    base: String,
    number: u32,
}

impl Name {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            number: 0,
        }
    }

    pub fn with_number(base: impl Into<String>, number: u32) -> Self {
        Self {
            base: base.into(),
            number,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Display text: the base, plus `_{number - 1}` for numbered names
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            0 => f.write_str(&self.base),
            n => write!(f, "{}_{}", self.base, n - 1),
        }
    }
}

impl From<&str> for Name {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

/// Decode a mapped name against the global and local name tables
///
/// # Errors
///
/// Returns [`crate::error::ResolveError::NameIndexOutOfRange`] when the index
/// falls outside the selected table.
pub fn decode<S: AsRef<str>>(mapped: MappedName, global: &[S], local: &[S]) -> ResolveResult<Name> {
    let (table, label) = if mapped.global {
        (global, "global")
    } else {
        (local, "local")
    };

    let base = usize::try_from(mapped.index)
        .ok()
        .and_then(|index| table.get(index))
        .ok_or_else(|| name_out_of_range(mapped.index, label, table.len()))?;

    Ok(Name::with_number(base.as_ref(), mapped.number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_selects_table() {
        let global = ["None", "Class", "Package"];
        let local = ["Hero", "Health"];

        assert_eq!(
            decode(MappedName::global(1), &global, &local).unwrap().text(),
            "Class"
        );
        assert_eq!(
            decode(MappedName::local(1), &global, &local).unwrap().text(),
            "Health"
        );
    }

    #[test]
    fn test_decode_numbered_name() {
        let local = ["Component"];
        let name = decode(MappedName::local(0).with_number(3), &[] as &[&str], &local).unwrap();
        assert_eq!(name.text(), "Component_2");
        assert_eq!(name.base(), "Component");
        assert_eq!(name.number(), 3);
    }

    #[test]
    fn test_decode_out_of_range() {
        let err = decode(MappedName::local(5), &["None"], &["Hero"]).unwrap_err();
        assert_eq!(err, name_out_of_range(5, "local", 1));
    }

    #[test]
    fn test_number_one_renders_zero_suffix() {
        assert_eq!(Name::with_number("Mesh", 1).to_string(), "Mesh_0");
        assert_eq!(Name::from("Mesh").to_string(), "Mesh");
    }
}
