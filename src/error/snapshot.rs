//! Snapshot and mappings errors

use super::PkgrefError;

/// Creates a snapshot parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PkgrefError {
    PkgrefError::SnapshotParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a type mappings parse error
pub fn mappings_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PkgrefError {
    PkgrefError::MappingsParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an export-not-found error
pub fn export_not_found(package: impl Into<String>, index: usize, count: usize) -> PkgrefError {
    PkgrefError::ExportNotFound {
        package: package.into(),
        index,
        count,
    }
}

/// Creates an invalid-index error
pub fn invalid_index(input: impl Into<String>) -> PkgrefError {
    PkgrefError::InvalidIndex {
        input: input.into(),
    }
}
