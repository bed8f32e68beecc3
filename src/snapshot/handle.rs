//! Object handles over a [`PackageSnapshot`]

use std::fmt;

use super::PackageSnapshot;
use crate::domain::ObjectFlags;
use crate::error::resolve::ResolveResult;
use crate::index::PackageObjectIndex;
use crate::names::{self, Name};
use crate::package::ObjectHandle;

/// Name the reader reports for the class of every script object
const SCRIPT_CLASS_NAME: &str = "Class";

/// Which table an index is interpreted against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Local,
    Imported(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandleKind {
    /// The snapshot's own package
    PackageRoot,
    Export(usize),
    Script(usize),
    /// Class reported for script objects; classes and structs are not told apart
    ScriptClass,
    ImportedRoot(usize),
    ImportedExport { package: usize, export: usize },
}

/// Cheap reference to one object of a snapshot
#[derive(Clone, Copy)]
pub struct SnapshotHandle<'a> {
    snapshot: &'a PackageSnapshot,
    kind: HandleKind,
}

impl<'a> SnapshotHandle<'a> {
    pub(crate) fn new(snapshot: &'a PackageSnapshot, kind: HandleKind) -> Self {
        Self { snapshot, kind }
    }

    /// True for objects defined by the snapshot's own package
    pub fn is_local(&self) -> bool {
        matches!(self.kind, HandleKind::PackageRoot | HandleKind::Export(_))
    }

    fn resolve(&self, index: PackageObjectIndex, scope: Scope) -> Option<Self> {
        self.snapshot.resolve_in(index, scope)
    }

    fn with_kind(&self, kind: HandleKind) -> Self {
        Self::new(self.snapshot, kind)
    }
}

impl PartialEq for SnapshotHandle<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.snapshot, other.snapshot) && self.kind == other.kind
    }
}

impl Eq for SnapshotHandle<'_> {}

impl fmt::Debug for SnapshotHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotHandle")
            .field("package", &self.snapshot.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl ObjectHandle for SnapshotHandle<'_> {
    fn name(&self) -> ResolveResult<Name> {
        let snapshot = self.snapshot;
        match self.kind {
            HandleKind::PackageRoot => Ok(Name::new(snapshot.name.as_str())),
            HandleKind::Export(position) => names::decode(
                snapshot.exports[position].object_name,
                &snapshot.global_names,
                &snapshot.names,
            ),
            HandleKind::Script(position) => names::decode(
                snapshot.script_objects[position].object_name,
                &snapshot.global_names,
                &snapshot.names,
            ),
            HandleKind::ScriptClass => Ok(Name::new(SCRIPT_CLASS_NAME)),
            HandleKind::ImportedRoot(package) => {
                Ok(Name::new(snapshot.imported_packages[package].name.as_str()))
            }
            HandleKind::ImportedExport { package, export } => Ok(Name::new(
                snapshot.imported_packages[package].exports[export]
                    .object_name
                    .as_str(),
            )),
        }
    }

    fn class(&self) -> Option<Self> {
        let snapshot = self.snapshot;
        match self.kind {
            HandleKind::PackageRoot | HandleKind::ScriptClass | HandleKind::ImportedRoot(_) => {
                None
            }
            HandleKind::Export(position) => {
                self.resolve(snapshot.exports[position].class_index, Scope::Local)
            }
            HandleKind::Script(_) => Some(self.with_kind(HandleKind::ScriptClass)),
            HandleKind::ImportedExport { package, export } => self.resolve(
                snapshot.imported_packages[package].exports[export].class_index,
                Scope::Imported(package),
            ),
        }
    }

    fn outer(&self) -> Option<Self> {
        let snapshot = self.snapshot;
        match self.kind {
            HandleKind::PackageRoot | HandleKind::ScriptClass | HandleKind::ImportedRoot(_) => {
                None
            }
            HandleKind::Export(position) => {
                let outer_index = snapshot.exports[position].outer_index;
                if outer_index.is_null() {
                    Some(self.with_kind(HandleKind::PackageRoot))
                } else {
                    self.resolve(outer_index, Scope::Local)
                }
            }
            HandleKind::Script(position) => {
                self.resolve(snapshot.script_objects[position].outer_index, Scope::Local)
            }
            HandleKind::ImportedExport { package, export } => {
                let outer_index = snapshot.imported_packages[package].exports[export].outer_index;
                if outer_index.is_null() {
                    Some(self.with_kind(HandleKind::ImportedRoot(package)))
                } else {
                    self.resolve(outer_index, Scope::Imported(package))
                }
            }
        }
    }

    fn flags(&self) -> Option<ObjectFlags> {
        match self.kind {
            HandleKind::PackageRoot => Some(self.snapshot.package_flags),
            HandleKind::Export(position) => Some(self.snapshot.exports[position].object_flags),
            _ => None,
        }
    }
}
