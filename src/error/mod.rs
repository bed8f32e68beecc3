//! Error types and handling for pkgref
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`resolve`]: Defects detected while resolving object references
//! - [`snapshot`]: Snapshot and type mappings loading errors
//! - [`fs`]: File system errors

pub mod fs;
pub mod resolve;
pub mod snapshot;

pub use resolve::ResolveError;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pkgref operations
#[derive(Error, Diagnostic, Debug)]
pub enum PkgrefError {
    // Resolution errors
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    // Snapshot errors
    #[error("Failed to parse package snapshot: {path}")]
    #[diagnostic(
        code(pkgref::snapshot::parse_failed),
        help("Snapshots are YAML or JSON documents; the extension selects the format")
    )]
    SnapshotParseFailed { path: String, reason: String },

    #[error("Failed to parse type mappings: {path}")]
    #[diagnostic(code(pkgref::snapshot::mappings_parse_failed))]
    MappingsParseFailed { path: String, reason: String },

    #[error("Export {index} not found in package '{package}' ({count} exports)")]
    #[diagnostic(
        code(pkgref::snapshot::export_not_found),
        help("Export indices are zero-based positions in the export map")
    )]
    ExportNotFound {
        package: String,
        index: usize,
        count: usize,
    },

    #[error("Invalid object index: {input}")]
    #[diagnostic(
        code(pkgref::snapshot::invalid_index),
        help("Pass the packed 64-bit index as decimal or 0x-prefixed hex")
    )]
    InvalidIndex { input: String },

    // Output errors
    #[error("Failed to write output: {reason}")]
    #[diagnostic(code(pkgref::output::failed))]
    OutputFailed { reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(pkgref::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(pkgref::fs::read_failed))]
    FileReadFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PkgrefError>;
