//! Owning-package walk
//!
//! Follows `outer` from a handle until reaching a handle with no outer. That
//! terminal handle is the package the object is defined in.

use crate::error::resolve::{ResolveResult, depth_exceeded};
use crate::package::ObjectHandle;

/// Find the package root that owns `handle`
///
/// A handle without an outer is its own package.
///
/// # Errors
///
/// Returns [`crate::error::ResolveError::DepthExceeded`] when the chain is
/// longer than `max_depth`, which in practice means it is cyclic.
pub fn owning_package<H: ObjectHandle>(handle: &H, max_depth: usize) -> ResolveResult<H> {
    let mut current = handle.clone();
    for _ in 0..=max_depth {
        match current.outer() {
            Some(outer) => current = outer,
            None => return Ok(current),
        }
    }
    Err(depth_exceeded(display_name(handle), max_depth))
}

/// Best-effort name for diagnostics
pub(crate) fn display_name<H: ObjectHandle>(handle: &H) -> String {
    handle
        .name()
        .map_or_else(|_| "<unreadable>".to_string(), |name| name.text())
}
