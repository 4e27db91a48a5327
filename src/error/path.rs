//! Model path errors

use super::MdlpackError;

/// Creates an invalid model path error
pub fn invalid_model_path(path: impl Into<String>) -> MdlpackError {
    MdlpackError::InvalidModelPath { path: path.into() }
}

/// Creates an invalid bundle name error
pub fn invalid_bundle_name(name: impl Into<String>) -> MdlpackError {
    MdlpackError::InvalidBundleName { name: name.into() }
}
