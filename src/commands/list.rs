//! List command implementation
//!
//! Prints the resolved manifests for the given models without copying anything.
//! Fails like `pack` would when a referenced file is missing.

use crate::cli::ListArgs;
use crate::collector::{collect_all, verify_sources};
use crate::commands::helpers::{discover_models, print_manifests};
use crate::error::Result;

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let models = discover_models(&args.models)?;
    let bundles = collect_all(&models, usize::from(args.jobs), |_| {})?;
    verify_sources(&bundles)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bundles)?);
    } else {
        print_manifests(&bundles);
    }

    Ok(())
}
