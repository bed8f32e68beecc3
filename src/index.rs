//! Packed object index references
//!
//! A [`PackageObjectIndex`] is a 64-bit value whose top two bits select the
//! table the reference points into and whose remaining 62 bits carry the
//! position or identifier within that table:
//!
//! ```text
//!  63 62 61                                                        0
//! ┌─────┬───────────────────────────────────────────────────────────┐
//! │kind │ payload                                                   │
//! └─────┴───────────────────────────────────────────────────────────┘
//!   00 Export          payload = export map position
//!   01 ScriptImport    payload = global script object id
//!   10 PackageImport   payload = (imported package << 32) | export position
//!   11 Null            all bits set
//! ```
//!
//! Snapshots spell indices out as tagged values (`{ export: 3 }`,
//! `{ script_import: 17 }`, `{ package_import: { package: 0, export: 2 } }`,
//! `null`) or as a raw integer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PkgrefError, snapshot::invalid_index};

const TYPE_SHIFT: u32 = 62;
const INDEX_MASK: u64 = (1 << TYPE_SHIFT) - 1;
const NULL_VALUE: u64 = u64::MAX;

/// Table an index points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Export,
    ScriptImport,
    PackageImport,
    Null,
}

/// Packed reference into one of a package's object tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IndexRepr", into = "IndexRepr")]
pub struct PackageObjectIndex(u64);

impl PackageObjectIndex {
    pub const NULL: Self = Self(NULL_VALUE);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn export(position: u32) -> Self {
        Self(position as u64)
    }

    pub const fn script_import(id: u64) -> Self {
        Self((1 << TYPE_SHIFT) | (id & INDEX_MASK))
    }

    pub const fn package_import(package: u32, export: u32) -> Self {
        Self((2 << TYPE_SHIFT) | ((package as u64) << 32) | export as u64)
    }

    pub const fn is_null(self) -> bool {
        self.0 == NULL_VALUE
    }

    pub const fn kind(self) -> IndexKind {
        match self.0 >> TYPE_SHIFT {
            0 => IndexKind::Export,
            1 => IndexKind::ScriptImport,
            2 => IndexKind::PackageImport,
            _ => IndexKind::Null,
        }
    }

    /// The 62-bit payload
    pub const fn value(self) -> u64 {
        self.0 & INDEX_MASK
    }

    /// Export map position, if this is an export reference
    pub fn as_export(self) -> Option<usize> {
        match self.kind() {
            IndexKind::Export => usize::try_from(self.value()).ok(),
            _ => None,
        }
    }

    /// `(imported package, export position)`, if this is a package import
    pub fn as_package_import(self) -> Option<(usize, usize)> {
        match self.kind() {
            IndexKind::PackageImport => {
                let value = self.value();
                let package = usize::try_from(value >> 32).ok()?;
                let export = usize::try_from(value & 0xFFFF_FFFF).ok()?;
                Some((package, export))
            }
            _ => None,
        }
    }
}

impl Default for PackageObjectIndex {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for PackageObjectIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            IndexKind::Null => write!(f, "null"),
            IndexKind::Export => write!(f, "export:{}", self.value()),
            IndexKind::ScriptImport => write!(f, "script:0x{:X}", self.value()),
            IndexKind::PackageImport => {
                let value = self.value();
                write!(f, "package:{}/{}", value >> 32, value & 0xFFFF_FFFF)
            }
        }
    }
}

impl FromStr for PackageObjectIndex {
    type Err = PkgrefError;

    /// Parse a raw packed index, decimal or `0x`-prefixed hex
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => trimmed.parse::<u64>(),
        };
        parsed.map(Self).map_err(|_| invalid_index(input))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TaggedIndex {
    Export(u32),
    ScriptImport(u64),
    PackageImport { package: u32, export: u32 },
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IndexRepr {
    Null(Option<()>),
    Raw(u64),
    Tagged(TaggedIndex),
}

impl From<IndexRepr> for PackageObjectIndex {
    fn from(repr: IndexRepr) -> Self {
        match repr {
            IndexRepr::Null(_) => Self::NULL,
            IndexRepr::Raw(raw) => Self(raw),
            IndexRepr::Tagged(TaggedIndex::Export(position)) => Self::export(position),
            IndexRepr::Tagged(TaggedIndex::ScriptImport(id)) => Self::script_import(id),
            IndexRepr::Tagged(TaggedIndex::PackageImport { package, export }) => {
                Self::package_import(package, export)
            }
        }
    }
}

impl From<PackageObjectIndex> for IndexRepr {
    fn from(index: PackageObjectIndex) -> Self {
        let value = index.value();
        match index.kind() {
            IndexKind::Null if index.is_null() => IndexRepr::Null(None),
            IndexKind::Null => IndexRepr::Raw(index.raw()),
            IndexKind::Export => u32::try_from(value)
                .map_or(IndexRepr::Raw(index.raw()), |position| {
                    IndexRepr::Tagged(TaggedIndex::Export(position))
                }),
            IndexKind::ScriptImport => IndexRepr::Tagged(TaggedIndex::ScriptImport(value)),
            IndexKind::PackageImport => {
                let (package, export) = index.as_package_import().unwrap_or_default();
                match (u32::try_from(package), u32::try_from(export)) {
                    (Ok(package), Ok(export)) => {
                        IndexRepr::Tagged(TaggedIndex::PackageImport { package, export })
                    }
                    _ => IndexRepr::Raw(index.raw()),
                }
            }
        }
    }
}
