//! Loose folder output: `<output>/<name>/<relative path>`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{WriteReport, read_source};
use crate::collector::{ResolvedBundle, verify_sources};
use crate::error::Result;
use crate::error::fs::write_failed;
use crate::hash;
use crate::path_utils::{asset_source_path, validate_bundle_name};
use crate::transaction::Transaction;

/// Writes resolved manifests into a bundle folder.
///
/// A path is written at most once per writer, across all manifests. All writes
/// of one call happen inside a [`Transaction`], so a failure leaves the output
/// as it was.
#[derive(Debug)]
pub struct BundleWriter {
    bundle_dir: PathBuf,
    written: HashSet<String>,
}

impl BundleWriter {
    /// Create a writer targeting `<output_dir>/<bundle_name>`.
    pub fn new(output_dir: &Path, bundle_name: &str) -> Result<Self> {
        let bundle_name = validate_bundle_name(bundle_name)?;
        Ok(Self {
            bundle_dir: output_dir.join(bundle_name),
            written: HashSet::new(),
        })
    }

    /// Folder the bundle is written to.
    pub fn bundle_dir(&self) -> &Path {
        &self.bundle_dir
    }

    /// Number of distinct files this writer has placed in the bundle.
    pub fn total_files(&self) -> usize {
        self.written.len()
    }

    /// Copy every file of `bundles` into the bundle folder.
    ///
    /// Every source file is checked before anything is written. `on_file` is
    /// called with each relative path as it is handled.
    pub fn write(
        &mut self,
        bundles: &[ResolvedBundle],
        mut on_file: impl FnMut(&str),
    ) -> Result<WriteReport> {
        verify_sources(bundles)?;

        let mut transaction = Transaction::new();
        let mut report = WriteReport::default();
        let mut written_now = HashSet::new();

        for bundle in bundles {
            debug!(
                "Writing {} files from {}",
                bundle.files.len(),
                bundle.root_dir
            );
            for file in &bundle.files {
                on_file(file);
                if self.written.contains(file) || !written_now.insert(file.clone()) {
                    report.duplicates += 1;
                    continue;
                }

                let source = asset_source_path(&bundle.root_dir, file);
                let destination = self.bundle_dir.join(file);
                if destination.is_file() {
                    if hash::same_contents(&source, &destination)? {
                        report.unchanged += 1;
                        continue;
                    }
                    transaction.backup_file(&destination)?;
                } else {
                    if let Some(parent) = destination.parent() {
                        transaction.create_dir_all(parent)?;
                    }
                    transaction.track_file_created(&destination);
                }

                let contents = read_source(&source)?;
                fs::write(&destination, contents)
                    .map_err(|e| write_failed(destination.display().to_string(), e.to_string()))?;
                report.written += 1;
            }
        }

        transaction.commit();
        self.written.extend(written_now);

        info!(
            "Bundle {}: {} written, {} unchanged, {} duplicates",
            self.bundle_dir.display(),
            report.written,
            report.unchanged,
            report.duplicates
        );
        Ok(report)
    }
}
