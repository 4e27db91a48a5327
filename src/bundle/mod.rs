//! Bundle output
//!
//! Resolved manifests are written either as one zip archive or as a loose
//! folder. Both keep each file's path relative to its game folder, write a
//! path at most once, and check every source before writing anything:
//! - [`archive`]: `<output>/<name>.zip`, entries under `<name>/`
//! - [`folder`]: `<output>/<name>/`

pub mod archive;
pub mod folder;

pub use archive::ArchiveWriter;
pub use folder::BundleWriter;

use std::path::Path;

use clap::ValueEnum;

use crate::collector::ResolvedBundle;
use crate::error::Result;
use crate::error::fs::open_failed;

/// Default bundle name.
pub const DEFAULT_BUNDLE_NAME: &str = "custom_mod";

/// How a bundle is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BundleFormat {
    /// A single `<name>.zip` archive
    #[default]
    Zip,
    /// A loose `<name>/` folder
    Folder,
}

/// Counts from one write call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    /// Files copied into the bundle.
    pub written: usize,
    /// Paths skipped because they were already written by this writer.
    pub duplicates: usize,
    /// Paths whose existing bundle copy already had identical content.
    pub unchanged: usize,
}

/// A bundle writer of either format.
#[derive(Debug)]
pub enum BundleOutput {
    Archive(ArchiveWriter),
    Folder(BundleWriter),
}

impl BundleOutput {
    /// Create a writer for `format` under `output_dir`.
    pub fn new(format: BundleFormat, output_dir: &Path, bundle_name: &str) -> Result<Self> {
        Ok(match format {
            BundleFormat::Zip => Self::Archive(ArchiveWriter::new(output_dir, bundle_name)?),
            BundleFormat::Folder => Self::Folder(BundleWriter::new(output_dir, bundle_name)?),
        })
    }

    /// Archive file or bundle folder being written.
    pub fn target(&self) -> &Path {
        match self {
            Self::Archive(writer) => writer.archive_path(),
            Self::Folder(writer) => writer.bundle_dir(),
        }
    }

    /// Distinct files in the bundle after the last write.
    pub fn total_files(&self) -> usize {
        match self {
            Self::Archive(writer) => writer.total_files(),
            Self::Folder(writer) => writer.total_files(),
        }
    }

    pub fn write(
        &mut self,
        bundles: &[ResolvedBundle],
        on_file: impl FnMut(&str),
    ) -> Result<WriteReport> {
        match self {
            Self::Archive(writer) => writer.write(bundles, on_file),
            Self::Folder(writer) => writer.write(bundles, on_file),
        }
    }
}

/// Read a source file, reporting failures against the source path.
fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| open_failed(path, &e))
}
