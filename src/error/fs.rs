//! File system errors

use super::PkgrefError;

/// Creates a file-not-found error
pub fn not_found(path: impl Into<String>) -> PkgrefError {
    PkgrefError::FileNotFound { path: path.into() }
}

/// Creates a file-read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PkgrefError {
    PkgrefError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

