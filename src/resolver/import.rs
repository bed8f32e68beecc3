//! Import construction and class fixups
//!
//! The container reports class references ambiguously in three situations, so
//! an import's class is rewritten by a fixed pipeline on a mutable builder:
//!
//! 1. **Default objects**: `Default__Foo` reports its class as `Class`; the
//!    real class is `Foo`.
//! 2. **Classes vs structs**: both report `Class`. The class package becomes
//!    `/Script/CoreUObject`, and a type database (when present) reclassifies
//!    types whose super chain does not end at `Object` as `ScriptStruct`.
//! 3. **Package roots**: an object with no outer is a `Package` in
//!    `/Script/CoreUObject`, whatever the earlier steps decided.
//!
//! Later steps override earlier ones; the order is part of the contract.

use log::debug;

use crate::domain::{ImportObject, PackageObjectDescription};
use crate::error::resolve::{ResolveResult, depth_exceeded};
use crate::package::{TypeDescriptor, TypeOracle};

/// Package holding the reflection types
pub const CORE_UOBJECT_PACKAGE: &str = "/Script/CoreUObject";
/// Class name reported for every class and struct reference
pub const CLASS_CLASS_NAME: &str = "Class";
pub const PACKAGE_CLASS_NAME: &str = "Package";
pub const SCRIPT_STRUCT_CLASS_NAME: &str = "ScriptStruct";
/// Root of every object class hierarchy
pub const OBJECT_ROOT_TYPE: &str = "Object";
/// Name prefix of class default objects
pub const DEFAULT_OBJECT_PREFIX: &str = "Default__";

/// Mutable import under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportBuilder {
    package_name: String,
    object_name: String,
    class_package: Option<String>,
    class_name: Option<String>,
}

impl ImportBuilder {
    pub(crate) fn new(
        package_name: String,
        object_name: String,
        class_package: Option<String>,
        class_name: Option<String>,
    ) -> Self {
        Self {
            package_name,
            object_name,
            class_package,
            class_name,
        }
    }

    fn class_is(&self, name: &str) -> bool {
        self.class_name.as_deref() == Some(name)
    }

    /// `Default__Foo` of class `Class` becomes class `Foo`
    pub(crate) fn apply_default_object_fixup(&mut self) {
        if !self.class_is(CLASS_CLASS_NAME) {
            return;
        }
        if let Some(class_name) = self.object_name.strip_prefix(DEFAULT_OBJECT_PREFIX) {
            debug!(
                "default object '{}': class 'Class' -> '{}'",
                self.object_name, class_name
            );
            self.class_name = Some(class_name.to_string());
        }
    }

    /// Pin `Class` references to the core package and split off structs
    ///
    /// The struct test is empirical: struct hierarchies have been observed to
    /// end at a root other than `Object`. An oracle miss leaves `Class`.
    pub(crate) fn apply_class_fixup(
        &mut self,
        oracle: Option<&dyn TypeOracle>,
        max_depth: usize,
    ) -> ResolveResult<()> {
        if !self.class_is(CLASS_CLASS_NAME) {
            return Ok(());
        }
        self.class_package = Some(CORE_UOBJECT_PACKAGE.to_string());

        let Some(oracle) = oracle else {
            return Ok(());
        };
        let Some(descriptor) = oracle.lookup(&self.object_name) else {
            return Ok(());
        };

        let root = super_root(oracle, descriptor, max_depth)
            .ok_or_else(|| depth_exceeded(self.object_name.clone(), max_depth))?;
        if root.name != OBJECT_ROOT_TYPE {
            debug!(
                "'{}' has super root '{}': class 'Class' -> 'ScriptStruct'",
                self.object_name, root.name
            );
            self.class_name = Some(SCRIPT_STRUCT_CLASS_NAME.to_string());
        }
        Ok(())
    }

    /// Outer-less objects are packages
    pub(crate) fn apply_package_fixup(&mut self, has_outer: bool) {
        if has_outer {
            return;
        }
        debug!("'{}' has no outer: treating as package", self.object_name);
        self.class_package = Some(CORE_UOBJECT_PACKAGE.to_string());
        self.class_name = Some(PACKAGE_CLASS_NAME.to_string());
    }

    pub(crate) fn finish(self, outer: Option<PackageObjectDescription>) -> ImportObject {
        ImportObject {
            package_name: self.package_name,
            object_name: self.object_name,
            class_package: self.class_package,
            class_name: self.class_name,
            outer: outer.map(Box::new),
        }
    }
}

/// Follow super types by name until the oracle no longer knows the next one
///
/// Returns `None` if the chain is longer than `max_depth`.
pub(crate) fn super_root<'a>(
    oracle: &'a dyn TypeOracle,
    descriptor: &'a TypeDescriptor,
    max_depth: usize,
) -> Option<&'a TypeDescriptor> {
    let mut root = descriptor;
    for _ in 0..=max_depth {
        match root
            .super_type
            .as_deref()
            .and_then(|super_name| oracle.lookup(super_name))
        {
            Some(next) => root = next,
            None => return Some(root),
        }
    }
    None
}
