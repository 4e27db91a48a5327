use clap::Parser;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the files a model needs:\n    mdlpack list ~/tf/models/props/chair.mdl\n\n\
                  Print manifests as JSON:\n    mdlpack list ./models --json")]
pub struct ListArgs {
    /// Model files, or directories searched recursively for .mdl files
    #[arg(required = true, value_name = "MODEL")]
    pub models: Vec<PathBuf>,

    /// Number of models decoded in parallel
    #[arg(long, short = 'j', env = "MDLPACK_JOBS", default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Print manifests as JSON
    #[arg(long)]
    pub json: bool,
}
