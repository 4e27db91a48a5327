//! Transaction support for bundle output
//!
//! Ensures a failed write never leaves a partial bundle behind.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//!
//! // Perform operations...
//! transaction.track_dir_created(dir);
//! transaction.backup_file(existing)?;
//! transaction.track_file_created(path);
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // rollback happens automatically
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Result;
use crate::error::fs::io_error;

/// Original content of a file overwritten during the transaction
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    content: Vec<u8>,
}

/// A transaction for atomic bundle writes
#[derive(Debug, Default)]
pub struct Transaction {
    /// Files created during this transaction
    created_files: HashSet<PathBuf>,

    /// Files overwritten during this transaction (with original content)
    modified_files: Vec<FileBackup>,

    /// Directories created during this transaction
    created_dirs: HashSet<PathBuf>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a file that was created during this transaction
    pub fn track_file_created(&mut self, path: impl Into<PathBuf>) {
        self.created_files.insert(path.into());
    }

    /// Track a directory that was created during this transaction
    pub fn track_dir_created(&mut self, path: impl Into<PathBuf>) {
        self.created_dirs.insert(path.into());
    }

    /// Save the current content of a file that is about to be overwritten
    pub fn backup_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read(path)
            .map_err(|e| io_error(format!("Failed to back up {}: {e}", path.display())))?;
        self.modified_files.push(FileBackup {
            path: path.to_path_buf(),
            content,
        });
        Ok(())
    }

    /// Create `dir` and any missing parents, tracking each one created
    pub fn create_dir_all(&mut self, dir: &Path) -> Result<()> {
        let mut missing = Vec::new();
        let mut current = Some(dir);
        while let Some(path) = current {
            if path.as_os_str().is_empty() || path.exists() {
                break;
            }
            missing.push(path.to_path_buf());
            current = path.parent();
        }

        for path in missing.into_iter().rev() {
            fs::create_dir(&path)
                .map_err(|e| io_error(format!("Failed to create {}: {e}", path.display())))?;
            self.track_dir_created(path);
        }
        Ok(())
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Manually trigger a rollback
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        // Remove created files
        for path in &self.created_files {
            if path.exists() {
                let _ = fs::remove_file(path);
            }
        }

        // Restore overwritten files
        for backup in &self.modified_files {
            if let Err(e) = fs::write(&backup.path, &backup.content) {
                warn!("Failed to restore {}: {}", backup.path.display(), e);
            }
        }

        // Remove created directories (in reverse order to handle nesting)
        let mut dirs: Vec<_> = self.created_dirs.iter().collect();
        dirs.sort_by_key(|b| std::cmp::Reverse(b.components().count()));
        for path in dirs {
            if path.is_dir()
                && fs::read_dir(path)
                    .map(|mut d| d.next().is_none())
                    .unwrap_or(false)
            {
                let _ = fs::remove_dir(path);
            }
        }

        self.created_files.clear();
        self.modified_files.clear();
        self.created_dirs.clear();
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            // Automatic rollback on drop if not committed
            self.rollback();
        }
    }
}
