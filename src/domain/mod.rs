//! Domain models for pkgref
//!
//! This module contains the value types produced by resolution. They are free
//! of any reference to the package they were resolved from, so a serializer
//! can consume them after the package is gone.

pub mod description;
pub mod flags;

pub use description::{ExportObject, ImportObject, PackageObjectDescription};
pub use flags::ObjectFlags;
