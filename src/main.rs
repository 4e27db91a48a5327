//! mdlpack - Source engine model bundler
//!
//! Reads compiled `.mdl` models, follows their `.vmt` materials to the `.vtf`
//! textures they reference, and copies the whole set into one folder laid out
//! the way the game expects.

use clap::Parser;
use miette::Diagnostic;

mod bundle;
mod cli;
mod collector;
mod commands;
mod error;
mod format;
mod hash;
mod path_utils;
mod progress;
#[cfg(test)]
mod test_fixtures;
mod transaction;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG directives are applied last and win over -v
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .format(|buf, record| {
            use std::io::Write;
            let level_style = match record.level() {
                log::Level::Error => "\x1b[31mERROR\x1b[0m",
                log::Level::Warn => "\x1b[33mWARN\x1b[0m",
                log::Level::Info => "\x1b[32mINFO\x1b[0m",
                log::Level::Debug => "\x1b[36mDEBUG\x1b[0m",
                log::Level::Trace => "\x1b[35mTRACE\x1b[0m",
            };

            writeln!(buf, "[{}] {}", level_style, record.args())
        })
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Pack(args) => commands::pack::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
