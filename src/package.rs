//! Collaborator interfaces consumed by the resolver
//!
//! The resolver never reads a container itself. It works against three
//! read-only seams:
//!
//! - [`PackageContext`]: the package being processed; turns indices into
//!   handles and decodes mapped names
//! - [`ObjectHandle`]: one resolvable object, with its name, class and outer
//! - [`TypeOracle`]: optional type database used to tell structs from classes
//!
//! Implementations must be safe to share across threads for concurrent
//! resolution calls; nothing here requires interior mutability.

use serde::{Deserialize, Serialize};

use crate::domain::ObjectFlags;
use crate::error::resolve::ResolveResult;
use crate::index::PackageObjectIndex;
use crate::names::{self, MappedName, Name};

/// A resolvable object inside some package
///
/// Handles are cheap values; the package they came from owns the underlying
/// data.
pub trait ObjectHandle: Clone {
    /// Object name; an unreadable name is an external-data defect
    fn name(&self) -> ResolveResult<Name>;

    /// Class of the object, if known
    fn class(&self) -> Option<Self>;

    /// Owning object; `None` only for package roots
    fn outer(&self) -> Option<Self>;

    /// Object flags; only locally defined objects carry them
    fn flags(&self) -> Option<ObjectFlags>;
}

/// The package currently being processed
pub trait PackageContext {
    type Handle: ObjectHandle;

    /// Package name, e.g. `/Game/Characters/Hero`
    fn name(&self) -> &str;

    /// Turn an index into a handle. Null or dangling indices yield `None`.
    fn resolve_index(&self, index: PackageObjectIndex) -> Option<Self::Handle>;

    fn global_names(&self) -> &[String];

    fn local_names(&self) -> &[String];

    fn decode_name(&self, mapped: MappedName) -> ResolveResult<Name> {
        names::decode(mapped, self.global_names(), self.local_names())
    }

    fn type_oracle(&self) -> Option<&dyn TypeOracle> {
        None
    }
}

/// Entry of a type database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default, rename = "super", skip_serializing_if = "Option::is_none")]
    pub super_type: Option<String>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_type: None,
        }
    }

    #[must_use]
    pub fn with_super(mut self, super_type: impl Into<String>) -> Self {
        self.super_type = Some(super_type.into());
        self
    }
}

/// Read-only type lookup
pub trait TypeOracle {
    fn lookup(&self, type_name: &str) -> Option<&TypeDescriptor>;
}

/// Row of a package's export map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMapEntry {
    pub object_name: MappedName,
    #[serde(default)]
    pub class_index: PackageObjectIndex,
    #[serde(default)]
    pub outer_index: PackageObjectIndex,
    #[serde(default, skip_serializing_if = "is_null_index")]
    pub super_index: PackageObjectIndex,
    #[serde(default, skip_serializing_if = "is_null_index")]
    pub template_index: PackageObjectIndex,
    #[serde(default)]
    pub object_flags: ObjectFlags,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_null_index(index: &PackageObjectIndex) -> bool {
    index.is_null()
}
