//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - pack: Pack command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};

pub mod completions;
pub mod list;
pub mod pack;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use pack::PackArgs;

/// mdlpack - Source engine model bundler
///
/// Collect a model together with every material and texture it references.
#[derive(Parser, Debug)]
#[command(
    name = "mdlpack",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle Source engine models with the materials and textures they need",
    long_about = "mdlpack reads compiled .mdl files, follows their .vmt materials to the .vtf \
                  textures they reference, and copies everything into one folder that mirrors \
                  the game's layout.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mdlpack pack tf/models/props/chair.mdl     \x1b[90m# Bundle one model into ./custom_mod\x1b[0m\n   \
                  mdlpack pack tf/models/props -n props -j 4 \x1b[90m# Bundle a whole folder\x1b[0m\n   \
                  mdlpack list tf/models/props/chair.mdl     \x1b[90m# Show the files a model needs\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy models and their dependencies into a bundle folder
    Pack(PackArgs),

    /// List the files each model depends on
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
