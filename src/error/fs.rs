//! File system errors

use std::path::Path;

use super::MdlpackError;

/// Creates a missing dependency error
pub fn missing_dependency(path: impl Into<String>, reason: impl Into<String>) -> MdlpackError {
    MdlpackError::MissingDependency {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps a failure to open a referenced file onto a missing dependency error
pub fn open_failed(path: &Path, err: &std::io::Error) -> MdlpackError {
    missing_dependency(path.display().to_string(), err.to_string())
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> MdlpackError {
    MdlpackError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> MdlpackError {
    MdlpackError::IoError {
        message: message.into(),
    }
}
