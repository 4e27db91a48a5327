//! Error types and handling for mdlpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`container`]: Binary model container errors
//! - [`material`]: Material text errors
//! - [`path`]: Model path errors
//! - [`fs`]: File system errors

pub mod container;
pub mod fs;
pub mod material;
pub mod path;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mdlpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum MdlpackError {
    // Container errors
    #[error("'{path}' is not a valid .mdl file: {reason}")]
    #[diagnostic(
        code(mdlpack::container::malformed),
        help("The file must be a compiled Source engine model starting with 'IDST'")
    )]
    MalformedContainer { path: String, reason: String },

    #[error(".mdl v{version} is not supported: {path}")]
    #[diagnostic(
        code(mdlpack::container::unsupported_version),
        help("Supported model versions are 48 through 52")
    )]
    UnsupportedVersion { path: String, version: u32 },

    #[error("Cannot determine material folder for '{path}' ({count} texture directories)")]
    #[diagnostic(
        code(mdlpack::container::ambiguous_material_folder),
        help("Only models declaring exactly one texture directory can be bundled")
    )]
    AmbiguousMaterialFolder { path: String, count: u32 },

    // Path errors
    #[error("Invalid model path: {path}")]
    #[diagnostic(
        code(mdlpack::path::invalid_model_path),
        help("Model paths must point inside a mounted game folder, e.g. .../tf/models/props/chair.mdl")
    )]
    InvalidModelPath { path: String },

    // Dependency errors
    #[error("Missing dependency '{path}': {reason}")]
    #[diagnostic(
        code(mdlpack::deps::missing),
        help("Every material and texture referenced by the model must exist under the game folder")
    )]
    MissingDependency { path: String, reason: String },

    // Text errors
    #[error("Failed to decode text in '{path}': {reason}")]
    #[diagnostic(code(mdlpack::text::decode_failed))]
    TextDecodeError { path: String, reason: String },

    // Input errors
    #[error("No .mdl files found in the given inputs")]
    #[diagnostic(
        code(mdlpack::input::no_models),
        help("Pass one or more .mdl files, or directories containing them")
    )]
    NoModelsFound,

    #[error("Invalid bundle name: '{name}'")]
    #[diagnostic(
        code(mdlpack::bundle::invalid_name),
        help("Bundle names must be a single non-empty folder name without path separators")
    )]
    InvalidBundleName { name: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(mdlpack::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(mdlpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mdlpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for MdlpackError {
    fn from(err: std::io::Error) -> Self {
        MdlpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MdlpackError {
    fn from(err: serde_json::Error) -> Self {
        MdlpackError::IoError {
            message: format!("Failed to serialize manifest: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MdlpackError>;
