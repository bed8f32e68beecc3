//! Resolution errors
//!
//! Absent inputs are never errors. Everything here is an external-data defect:
//! a corrupt name reference, a cyclic outer chain, or an export that carries no
//! flags. None of them are recovered locally.

use miette::Diagnostic;
use thiserror::Error;

/// Defect detected while building a description tree
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Name index {index} out of range for {table} name table ({len} entries)")]
    #[diagnostic(
        code(pkgref::resolve::name_out_of_range),
        help("The name table is truncated or the mapped name is corrupt")
    )]
    NameIndexOutOfRange {
        index: u32,
        table: &'static str,
        len: usize,
    },

    #[error("Resolving '{object}' exceeded the maximum depth of {max_depth}")]
    #[diagnostic(
        code(pkgref::resolve::depth_exceeded),
        help("The container most likely has a cyclic outer chain; raise --max-depth only for very deep hierarchies")
    )]
    DepthExceeded { object: String, max_depth: usize },

    #[error("Export '{object}' carries no object flags")]
    #[diagnostic(code(pkgref::resolve::missing_flags))]
    MissingObjectFlags { object: String },
}

/// Result alias for resolution
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Creates a name-out-of-range error
pub fn name_out_of_range(index: u32, table: &'static str, len: usize) -> ResolveError {
    ResolveError::NameIndexOutOfRange { index, table, len }
}

/// Creates a depth-exceeded error
pub fn depth_exceeded(object: impl Into<String>, max_depth: usize) -> ResolveError {
    ResolveError::DepthExceeded {
        object: object.into(),
        max_depth,
    }
}

/// Creates a missing-flags error
pub fn missing_flags(object: impl Into<String>) -> ResolveError {
    ResolveError::MissingObjectFlags {
        object: object.into(),
    }
}
