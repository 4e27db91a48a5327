//! Command helper utilities

use std::path::{Path, PathBuf};

use console::Style;
use log::debug;
use walkdir::WalkDir;

use crate::collector::ResolvedBundle;
use crate::error::fs::{io_error, missing_dependency};
use crate::error::{MdlpackError, Result};

const MODEL_EXTENSION: &str = "mdl";

/// Expand command line inputs into model files.
///
/// Files are taken as given. Directories are searched recursively for `.mdl`
/// files in file-name order. Inputs that do not exist are an error.
pub fn discover_models(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut models = Vec::new();

    for input in inputs {
        if input.is_file() {
            models.push(input.clone());
        } else if input.is_dir() {
            let before = models.len();
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.map_err(|e| io_error(format!("Failed to read {}: {e}", input.display())))?;
                if entry.file_type().is_file() && is_model_file(entry.path()) {
                    models.push(entry.into_path());
                }
            }
            debug!("Found {} models in {}", models.len() - before, input.display());
        } else {
            return Err(missing_dependency(input.display().to_string(), "no such file or directory"));
        }
    }

    if models.is_empty() {
        return Err(MdlpackError::NoModelsFound);
    }
    Ok(models)
}

fn is_model_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MODEL_EXTENSION))
}

/// Short label for a model in progress output.
pub fn model_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Total number of files across manifests.
pub fn total_files(bundles: &[ResolvedBundle]) -> usize {
    bundles.iter().map(|bundle| bundle.files.len()).sum()
}

/// Print manifests grouped by game folder.
pub fn print_manifests(bundles: &[ResolvedBundle]) {
    for bundle in bundles {
        println!(
            "{} ({} files)",
            Style::new().bold().yellow().apply_to(&bundle.root_dir),
            bundle.files.len()
        );
        for file in &bundle.files {
            println!("  {file}");
        }
        println!();
    }
}
