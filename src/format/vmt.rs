//! Material (`.vmt`) texture reference scanning.
//!
//! This is a line scan, not a KeyValues parser: braces, comments and nested
//! blocks are never interpreted. See <https://developer.valvesoftware.com/wiki/VMT>.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::error::fs::open_failed;
use crate::error::material::decode_failed;

/// Parameters whose values name a texture. Matched case-sensitively.
pub const TEXTURE_PARAMETERS: [&str; 4] = ["$basetexture", "$detail", "$bumpmap", "%tooltexture"];

/// A decoded material file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialAsset {
    pub source_path: PathBuf,
    /// Texture references in line order, duplicates kept.
    pub textures: Vec<String>,
}

impl MaterialAsset {
    /// Read and decode a material file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| open_failed(path, &e))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| decode_failed(path.display().to_string(), e.to_string()))?;
        Ok(Self::decode(path, &text))
    }

    /// Collect texture references from material text.
    pub fn decode(source_path: &Path, text: &str) -> Self {
        let textures = text
            .trim_start_matches('\u{feff}')
            .lines()
            .filter_map(texture_reference)
            .collect::<Vec<_>>();

        debug!(
            "Decoded {}: {} textures",
            source_path.display(),
            textures.len()
        );

        Self {
            source_path: source_path.to_path_buf(),
            textures,
        }
    }
}

/// Returns the texture named on `line`, if the line sets a texture parameter.
fn texture_reference(line: &str) -> Option<String> {
    let line = line.trim().replace(['"', '\''], "");
    let (parameter, value) = line.split_once(char::is_whitespace)?;
    let value = value.trim_start();
    if value.is_empty() || !TEXTURE_PARAMETERS.contains(&parameter) {
        return None;
    }
    Some(value.to_string())
}
