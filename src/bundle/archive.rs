//! Zip output: `<output>/<name>.zip` with every entry under `<name>/`.
//!
//! The archive is assembled in a temp file next to its destination and renamed
//! into place only after it is complete.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{WriteReport, read_source};
use crate::collector::{ResolvedBundle, verify_sources};
use crate::error::Result;
use crate::error::fs::write_failed;
use crate::path_utils::{asset_source_path, validate_bundle_name};
use crate::transaction::Transaction;

/// Extension of bundle archives.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Writes resolved manifests into a single zip archive.
#[derive(Debug)]
pub struct ArchiveWriter {
    output_dir: PathBuf,
    bundle_name: String,
    archive_path: PathBuf,
    entries: usize,
}

impl ArchiveWriter {
    /// Create a writer targeting `<output_dir>/<bundle_name>.zip`.
    pub fn new(output_dir: &Path, bundle_name: &str) -> Result<Self> {
        let bundle_name = validate_bundle_name(bundle_name)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            bundle_name: bundle_name.to_string(),
            archive_path: output_dir.join(format!("{bundle_name}.{ARCHIVE_EXTENSION}")),
            entries: 0,
        })
    }

    /// Path of the archive.
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Number of entries in the last archive written.
    pub fn total_files(&self) -> usize {
        self.entries
    }

    /// Write every file of `bundles` into a fresh archive, replacing any
    /// existing one.
    ///
    /// An entry path is written once; later manifests naming the same relative
    /// path are counted as duplicates.
    pub fn write(
        &mut self,
        bundles: &[ResolvedBundle],
        mut on_file: impl FnMut(&str),
    ) -> Result<WriteReport> {
        verify_sources(bundles)?;

        let mut transaction = Transaction::new();
        transaction.create_dir_all(&self.output_dir)?;

        let temp = NamedTempFile::new_in(&self.output_dir).map_err(|e| self.write_error(e))?;
        let mut zip = ZipWriter::new(temp);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut report = WriteReport::default();
        let mut entries = HashSet::new();
        for bundle in bundles {
            debug!(
                "Archiving {} files from {}",
                bundle.files.len(),
                bundle.root_dir
            );
            for file in &bundle.files {
                on_file(file);
                let entry = format!("{}/{file}", self.bundle_name);
                if !entries.insert(entry.clone()) {
                    report.duplicates += 1;
                    continue;
                }

                let contents = read_source(&asset_source_path(&bundle.root_dir, file))?;
                zip.start_file(entry, options)
                    .map_err(|e| self.write_error(e))?;
                zip.write_all(&contents).map_err(|e| self.write_error(e))?;
                report.written += 1;
            }
        }

        let temp = zip.finish().map_err(|e| self.write_error(e))?;
        temp.persist(&self.archive_path)
            .map_err(|e| self.write_error(e.error))?;
        transaction.commit();
        self.entries = entries.len();

        info!(
            "Archive {}: {} entries, {} duplicates",
            self.archive_path.display(),
            report.written,
            report.duplicates
        );
        Ok(report)
    }

    fn write_error(&self, err: impl ToString) -> crate::error::MdlpackError {
        write_failed(self.archive_path.display().to_string(), err.to_string())
    }
}
