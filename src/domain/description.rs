//! Portable descriptions of package objects
//!
//! A [`PackageObjectDescription`] is either an [`ImportObject`] (defined in
//! another package and only referenced) or an [`ExportObject`] (owned by the
//! package being processed). Both nest their `outer` (and, for exports, their
//! class) as further descriptions, forming a tree that ends at a package root.
//!
//! ## Serialized form
//!
//! ```text
//! { "type": "Import", "packageName": "/Script/Engine", "objectName": "Actor",
//!   "classPackage": "/Script/CoreUObject", "className": "Class",
//!   "outer": { "type": "Import", ... } }
//! ```
//!
//! Absent optional fields are omitted.

use serde::{Deserialize, Serialize};

use super::ObjectFlags;

/// Resolved object reference, tagged by locality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PackageObjectDescription {
    Import(ImportObject),
    Export(ExportObject),
}

/// Object defined in a package other than the one being processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportObject {
    pub package_name: String,
    pub object_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer: Option<Box<PackageObjectDescription>>,
}

/// Object defined and owned by the package being processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportObject {
    pub package_name: String,
    pub object_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_class: Option<Box<PackageObjectDescription>>,
    #[serde(default)]
    pub object_flags: ObjectFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer: Option<Box<PackageObjectDescription>>,
}

impl PackageObjectDescription {
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }

    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }

    pub fn package_name(&self) -> &str {
        match self {
            Self::Import(import) => &import.package_name,
            Self::Export(export) => &export.package_name,
        }
    }

    pub fn object_name(&self) -> &str {
        match self {
            Self::Import(import) => &import.object_name,
            Self::Export(export) => &export.object_name,
        }
    }

    pub fn outer(&self) -> Option<&PackageObjectDescription> {
        match self {
            Self::Import(import) => import.outer.as_deref(),
            Self::Export(export) => export.outer.as_deref(),
        }
    }

    pub fn as_import(&self) -> Option<&ImportObject> {
        match self {
            Self::Import(import) => Some(import),
            Self::Export(_) => None,
        }
    }

    pub fn as_export(&self) -> Option<&ExportObject> {
        match self {
            Self::Export(export) => Some(export),
            Self::Import(_) => None,
        }
    }

    /// Iterate the outer chain, nearest owner first
    pub fn outer_chain(&self) -> impl Iterator<Item = &PackageObjectDescription> {
        std::iter::successors(self.outer(), |node| node.outer())
    }

    /// Number of owners above this node
    pub fn outer_depth(&self) -> usize {
        self.outer_chain().count()
    }

    /// Dot-joined path of object names from the outermost owner down to this node
    pub fn object_path(&self) -> String {
        let mut names: Vec<&str> = self.outer_chain().map(Self::object_name).collect();
        names.reverse();
        names.push(self.object_name());
        names.join(".")
    }
}

impl From<ImportObject> for PackageObjectDescription {
    fn from(import: ImportObject) -> Self {
        Self::Import(import)
    }
}

impl From<ExportObject> for PackageObjectDescription {
    fn from(export: ExportObject) -> Self {
        Self::Export(export)
    }
}
