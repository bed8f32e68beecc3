//! pkgref - package object reference resolver
//!
//! Turns object references found inside a packaged asset container into
//! portable [`PackageObjectDescription`] trees: imports for objects defined in
//! other packages, exports for objects the package owns. Each description
//! carries its package, name, class and full owner chain, so a serializer can
//! rebuild a stable identity without the container.
//!
//! The container reader, name tables and type database are consumed through
//! the traits in [`package`]; [`snapshot`] provides an in-memory
//! implementation loaded from YAML or JSON.

pub mod domain;
pub mod error;
pub mod index;
pub mod names;
pub mod package;
pub mod resolver;
pub mod snapshot;

#[cfg(test)]
mod test_fixtures;

pub use domain::{ExportObject, ImportObject, ObjectFlags, PackageObjectDescription};
pub use error::{PkgrefError, ResolveError, Result};
pub use index::PackageObjectIndex;
pub use package::{ExportMapEntry, ObjectHandle, PackageContext, TypeDescriptor, TypeOracle};
pub use resolver::{ObjectResolver, ResolverOptions};
