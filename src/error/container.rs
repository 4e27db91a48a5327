//! Binary model container errors

use super::MdlpackError;

/// Creates a malformed container error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> MdlpackError {
    MdlpackError::MalformedContainer {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported version error
pub fn unsupported_version(path: impl Into<String>, version: u32) -> MdlpackError {
    MdlpackError::UnsupportedVersion {
        path: path.into(),
        version,
    }
}

/// Creates an ambiguous material folder error
pub fn ambiguous_material_folder(path: impl Into<String>, count: u32) -> MdlpackError {
    MdlpackError::AmbiguousMaterialFolder {
        path: path.into(),
        count,
    }
}
