use clap::Parser;
use std::path::PathBuf;

use crate::bundle::{BundleFormat, DEFAULT_BUNDLE_NAME};

/// Arguments for the pack command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Pack a single model:\n    mdlpack pack ~/tf/models/props/chair.mdl\n\n\
                   Pack every model under a folder:\n    mdlpack pack ~/tf/models/props -n props_pack\n\n\
                   Write a loose folder instead of a zip:\n    mdlpack pack ./models -f folder\n\n\
                   Decode models on four threads:\n    mdlpack pack ./models -j 4\n\n\
                   Preview the bundle without writing:\n    mdlpack pack ./models/chair.mdl --dry-run")]
pub struct PackArgs {
    /// Model files, or directories searched recursively for .mdl files
    #[arg(required = true, value_name = "MODEL")]
    pub models: Vec<PathBuf>,

    /// Folder the bundle is created in
    #[arg(long, short = 'o', env = "MDLPACK_OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// Name of the bundle archive or folder
    #[arg(long, short = 'n', env = "MDLPACK_NAME", default_value = DEFAULT_BUNDLE_NAME)]
    pub name: String,

    /// Bundle layout
    #[arg(long, short = 'f', env = "MDLPACK_FORMAT", value_enum, default_value_t = BundleFormat::Zip)]
    pub format: BundleFormat,

    /// Number of models decoded in parallel
    #[arg(long, short = 'j', env = "MDLPACK_JOBS", default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Show what would be bundled without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
