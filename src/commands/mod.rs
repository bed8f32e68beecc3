//! Command implementations for pkgref CLI

pub mod completions;
pub mod resolve;
pub mod version;
