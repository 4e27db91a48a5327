//! Version command implementation

use crate::error::Result;
use crate::format::mdl::SUPPORTED_VERSIONS;

/// Run version command
pub fn run() -> Result<()> {
    println!("mdlpack {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!(
        "  Model versions: {}-{}",
        SUPPORTED_VERSIONS.start(),
        SUPPORTED_VERSIONS.end()
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
