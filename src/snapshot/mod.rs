//! In-memory package snapshots
//!
//! A [`PackageSnapshot`] is an already-parsed package: its name tables, the
//! script objects it can see, the packages it imports from, and its export
//! map. It implements [`PackageContext`] so the resolver can run without the
//! container reader.
//!
//! ```yaml
//! name: /Game/Characters/Hero
//! global_names: [None, Class, /Script/Engine, Actor, Default__Actor]
//! names: [Hero, Hero_C, Default__Hero_C]
//! script_objects:
//!   - id: 1
//!     object_name: { index: 2, global: true }
//!   - id: 2
//!     object_name: { index: 3, global: true }
//!     outer_index: { script_import: 1 }
//! exports:
//!   - object_name: { index: 1 }
//!     class_index: { script_import: 2 }
//!     object_flags: 1
//! ```
//!
//! Cross references are not validated on load: dangling indices simply
//! resolve to nothing.

pub mod format;
pub mod handle;
pub mod mappings;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ObjectFlags;
use crate::error::{Result, snapshot::parse_failed};
use crate::index::{IndexKind, PackageObjectIndex};
use crate::names::MappedName;
use crate::package::{ExportMapEntry, PackageContext, TypeOracle};

pub use format::DocumentFormat;
pub use handle::SnapshotHandle;
pub use mappings::TypeMappings;

use handle::{HandleKind, Scope};

/// Script object visible to the package (engine-native classes, structs,
/// their default objects and script packages)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptObjectEntry {
    /// Payload of the `script_import` index that refers to this object
    pub id: u64,
    pub object_name: MappedName,
    #[serde(default)]
    pub outer_index: PackageObjectIndex,
}

/// Package this package imports objects from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedPackage {
    pub name: String,
    #[serde(default)]
    pub exports: Vec<ImportedExport>,
}

/// Export of an imported package
///
/// `export` indices in `class_index`/`outer_index` refer to the imported
/// package's own exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedExport {
    pub object_name: String,
    #[serde(default)]
    pub class_index: PackageObjectIndex,
    #[serde(default)]
    pub outer_index: PackageObjectIndex,
}

/// Parsed package contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageSnapshot {
    pub name: String,
    #[serde(default)]
    pub package_flags: ObjectFlags,
    #[serde(default)]
    pub global_names: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub script_objects: Vec<ScriptObjectEntry>,
    #[serde(default)]
    pub imported_packages: Vec<ImportedPackage>,
    #[serde(default)]
    pub exports: Vec<ExportMapEntry>,
    #[serde(skip)]
    mappings: Option<TypeMappings>,
}

impl PackageSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load a snapshot from a YAML or JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (content, format) = format::read_document(path)?;
        format
            .parse(&content)
            .map_err(|reason| parse_failed(path.display().to_string(), reason))
    }

    /// # Errors
    ///
    /// Returns an error if the document is not a valid snapshot.
    pub fn from_yaml(content: &str) -> Result<Self> {
        DocumentFormat::Yaml
            .parse(content)
            .map_err(|reason| parse_failed("<yaml>", reason))
    }

    /// # Errors
    ///
    /// Returns an error if the document is not a valid snapshot.
    pub fn from_json(content: &str) -> Result<Self> {
        DocumentFormat::Json
            .parse(content)
            .map_err(|reason| parse_failed("<json>", reason))
    }

    /// Attach a type database used for class/struct disambiguation
    #[must_use]
    pub fn with_mappings(mut self, mappings: TypeMappings) -> Self {
        self.mappings = Some(mappings);
        self
    }

    pub fn mappings(&self) -> Option<&TypeMappings> {
        self.mappings.as_ref()
    }

    /// Handle for the package itself
    pub fn root(&self) -> SnapshotHandle<'_> {
        SnapshotHandle::new(self, HandleKind::PackageRoot)
    }

    /// Handle for the export at `position`, if it exists
    pub fn export_handle(&self, position: usize) -> Option<SnapshotHandle<'_>> {
        (position < self.exports.len())
            .then(|| SnapshotHandle::new(self, HandleKind::Export(position)))
    }

    pub(crate) fn resolve_in(
        &self,
        index: PackageObjectIndex,
        scope: Scope,
    ) -> Option<SnapshotHandle<'_>> {
        let kind = match index.kind() {
            IndexKind::Null => return None,
            IndexKind::Export => {
                let position = index.as_export()?;
                match scope {
                    Scope::Local => {
                        (position < self.exports.len()).then_some(HandleKind::Export(position))?
                    }
                    Scope::Imported(package) => {
                        self.imported_export(package, position)?;
                        HandleKind::ImportedExport {
                            package,
                            export: position,
                        }
                    }
                }
            }
            IndexKind::ScriptImport => {
                let id = index.value();
                let position = self.script_objects.iter().position(|entry| entry.id == id)?;
                HandleKind::Script(position)
            }
            IndexKind::PackageImport => {
                let (package, export) = index.as_package_import()?;
                self.imported_export(package, export)?;
                HandleKind::ImportedExport { package, export }
            }
        };
        Some(SnapshotHandle::new(self, kind))
    }

    pub(crate) fn imported_export(&self, package: usize, export: usize) -> Option<&ImportedExport> {
        self.imported_packages.get(package)?.exports.get(export)
    }
}

impl<'a> PackageContext for &'a PackageSnapshot {
    type Handle = SnapshotHandle<'a>;

    fn name(&self) -> &str {
        &self.name
    }

    fn resolve_index(&self, index: PackageObjectIndex) -> Option<SnapshotHandle<'a>> {
        let snapshot: &'a PackageSnapshot = *self;
        snapshot.resolve_in(index, Scope::Local)
    }

    fn global_names(&self) -> &[String] {
        &self.global_names
    }

    fn local_names(&self) -> &[String] {
        &self.names
    }

    fn type_oracle(&self) -> Option<&dyn TypeOracle> {
        self.mappings.as_ref().map(|mappings| mappings as &dyn TypeOracle)
    }
}
