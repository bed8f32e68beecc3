//! Object reference resolution
//!
//! This module turns references found inside a package into
//! [`PackageObjectDescription`] trees:
//! - [`ObjectResolver::resolve_index`]: a packed index, which may be null
//! - [`ObjectResolver::resolve_handle`]: an already resolved handle
//! - [`ObjectResolver::resolve_export_entry`]: a row of the package's own
//!   export map, always described as an export
//!
//! ## Classification
//!
//! ```text
//! handle ──outer──▶ outer ──outer──▶ … ──▶ root (no outer)
//!                                           │
//!                     root name == package name ?
//!                        yes ─▶ Export { class, flags, outer }
//!                        no  ─▶ Import { class package/name fixups, outer }
//! ```
//!
//! Outers and classes are resolved recursively into freshly allocated nodes.
//! Nothing is cached between calls, so a resolver can be shared by any number
//! of threads as long as the package it reads from can.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pkgref::resolver::ObjectResolver;
//! use pkgref::snapshot::PackageSnapshot;
//!
//! let snapshot = PackageSnapshot::load("Hero.yaml")?;
//! let resolver = ObjectResolver::new(&snapshot);
//! for entry in &snapshot.exports {
//!     let description = resolver.resolve_export_entry(entry)?;
//!     println!("{}", description.object_path());
//! }
//! # Ok::<(), pkgref::error::PkgrefError>(())
//! ```

pub mod import;
pub mod owner;


use log::trace;

use crate::domain::{ExportObject, ImportObject, ObjectFlags, PackageObjectDescription};
use crate::error::resolve::{ResolveResult, depth_exceeded, missing_flags};
use crate::index::PackageObjectIndex;
use crate::package::{ExportMapEntry, ObjectHandle, PackageContext};

use import::ImportBuilder;
pub use owner::owning_package;

/// Default bound on outer-chain length and recursion depth
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables for a resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Longest outer chain (and deepest class/outer recursion) accepted
    /// before the input is treated as cyclic
    pub max_depth: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Resolves references against one package
#[derive(Debug, Clone, Copy)]
pub struct ObjectResolver<P: PackageContext> {
    package: P,
    options: ResolverOptions,
}

impl<P: PackageContext> ObjectResolver<P> {
    pub fn new(package: P) -> Self {
        Self::with_options(package, ResolverOptions::default())
    }

    pub fn with_options(package: P, options: ResolverOptions) -> Self {
        Self { package, options }
    }

    pub fn package(&self) -> &P {
        &self.package
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve a packed index
    ///
    /// A missing or null index is `Ok(None)`, as is an index the package
    /// cannot turn into a handle.
    ///
    /// # Errors
    ///
    /// Propagates defects from [`Self::resolve_handle`].
    pub fn resolve_index(
        &self,
        index: Option<PackageObjectIndex>,
    ) -> ResolveResult<Option<PackageObjectDescription>> {
        let handle = self.handle_for(index);
        self.resolve_handle(handle.as_ref())
    }

    /// Resolve a handle, classifying it as an import or export
    ///
    /// # Errors
    ///
    /// Returns an error for unreadable names, outer chains longer than
    /// [`ResolverOptions::max_depth`], and exports without flags.
    pub fn resolve_handle(
        &self,
        handle: Option<&P::Handle>,
    ) -> ResolveResult<Option<PackageObjectDescription>> {
        self.describe_opt(handle, 0)
    }

    /// Describe a row of the package's own export map
    ///
    /// The row is known to be local, so no classification takes place.
    ///
    /// # Errors
    ///
    /// Returns an error if the object name cannot be decoded, or if resolving
    /// its class or outer fails.
    pub fn resolve_export_entry(
        &self,
        entry: &ExportMapEntry,
    ) -> ResolveResult<PackageObjectDescription> {
        let class = self.handle_for(Some(entry.class_index));
        let outer = self.handle_for(Some(entry.outer_index));
        let object_name = self.package.decode_name(entry.object_name)?.text();
        trace!("resolving export entry '{object_name}'");

        let export = self.build_export(
            self.package.name().to_string(),
            object_name,
            class.as_ref(),
            outer.as_ref(),
            entry.object_flags,
            0,
        )?;
        Ok(export.into())
    }

    fn handle_for(&self, index: Option<PackageObjectIndex>) -> Option<P::Handle> {
        index
            .filter(|index| !index.is_null())
            .and_then(|index| self.package.resolve_index(index))
    }

    fn describe_opt(
        &self,
        handle: Option<&P::Handle>,
        depth: usize,
    ) -> ResolveResult<Option<PackageObjectDescription>> {
        handle.map(|handle| self.describe(handle, depth)).transpose()
    }

    fn describe(&self, handle: &P::Handle, depth: usize) -> ResolveResult<PackageObjectDescription> {
        let object_name = handle.name()?.text();
        if depth > self.options.max_depth {
            return Err(depth_exceeded(object_name, self.options.max_depth));
        }

        let package_name = owning_package(handle, self.options.max_depth)?
            .name()?
            .text();
        trace!("resolving '{object_name}' owned by '{package_name}'");

        if package_name != self.package.name() {
            return self
                .build_import(package_name, object_name, handle, depth)
                .map(Into::into);
        }

        let flags = handle
            .flags()
            .ok_or_else(|| missing_flags(object_name.clone()))?;
        let export = self.build_export(
            package_name,
            object_name,
            handle.class().as_ref(),
            handle.outer().as_ref(),
            flags,
            depth,
        )?;
        Ok(export.into())
    }

    fn build_import(
        &self,
        package_name: String,
        object_name: String,
        handle: &P::Handle,
        depth: usize,
    ) -> ResolveResult<ImportObject> {
        let class = handle.class();
        let class_outer = class.as_ref().and_then(ObjectHandle::outer);
        let outer = handle.outer();

        let class_name = class.as_ref().map(ObjectHandle::name).transpose()?;
        let class_package = match class_outer {
            Some(class_outer) => Some(class_outer.name()?),
            None => outer.as_ref().map(ObjectHandle::name).transpose()?,
        };

        let mut import = ImportBuilder::new(
            package_name,
            object_name,
            class_package.map(|name| name.text()),
            class_name.map(|name| name.text()),
        );
        import.apply_default_object_fixup();
        import.apply_class_fixup(self.package.type_oracle(), self.options.max_depth)?;
        import.apply_package_fixup(outer.is_some());

        let outer = self.describe_opt(outer.as_ref(), depth + 1)?;
        Ok(import.finish(outer))
    }

    fn build_export(
        &self,
        package_name: String,
        object_name: String,
        class: Option<&P::Handle>,
        outer: Option<&P::Handle>,
        object_flags: ObjectFlags,
        depth: usize,
    ) -> ResolveResult<ExportObject> {
        let object_class = self.describe_opt(class, depth + 1)?;
        let outer = self.describe_opt(outer, depth + 1)?;
        Ok(ExportObject {
            package_name,
            object_name,
            object_class: object_class.map(Box::new),
            object_flags,
            outer: outer.map(Box::new),
        })
    }
}

/// Resolve a packed index with default options
///
/// # Errors
///
/// See [`ObjectResolver::resolve_index`].
pub fn resolve_index<P: PackageContext>(
    package: P,
    index: Option<PackageObjectIndex>,
) -> ResolveResult<Option<PackageObjectDescription>> {
    ObjectResolver::new(package).resolve_index(index)
}

/// Resolve a handle with default options
///
/// # Errors
///
/// See [`ObjectResolver::resolve_handle`].
pub fn resolve_handle<P: PackageContext>(
    package: P,
    handle: Option<&P::Handle>,
) -> ResolveResult<Option<PackageObjectDescription>> {
    ObjectResolver::new(package).resolve_handle(handle)
}

/// Describe an export map row with default options
///
/// # Errors
///
/// See [`ObjectResolver::resolve_export_entry`].
pub fn resolve_export_entry<P: PackageContext>(
    package: P,
    entry: &ExportMapEntry,
) -> ResolveResult<PackageObjectDescription> {
    ObjectResolver::new(package).resolve_export_entry(entry)
}
