//! Material text errors

use super::MdlpackError;

/// Creates a text decode error
pub fn decode_failed(path: impl Into<String>, reason: impl Into<String>) -> MdlpackError {
    MdlpackError::TextDecodeError {
        path: path.into(),
        reason: reason.into(),
    }
}
