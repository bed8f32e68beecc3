//! Version command implementation

use pkgref::error::Result;
use pkgref::resolver::DEFAULT_MAX_DEPTH;

/// Run version command
pub fn run() -> Result<()> {
    println!("pkgref {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Default max depth: {DEFAULT_MAX_DEPTH}");

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
