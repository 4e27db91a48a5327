//! Cross-platform path utilities for mdlpack
//!
//! Asset paths inside a game folder are always handled as forward-slash strings;
//! they double as deduplication keys and as paths inside the output bundle.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::error::path::{invalid_bundle_name, invalid_model_path};

/// Path segment that marks the start of a model path inside a game folder.
pub const MODELS_ANCHOR: &str = "models";

/// Convert a path to a string with forward slashes.
///
/// # Examples
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new("C:\\Users\\file.txt"));
/// assert_eq!(forward, "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Join asset path segments with `/`.
///
/// Backslashes inside segments are treated as separators and empty segments are
/// dropped, so `["materials", "models\\props\\", "chair"]` becomes
/// `materials/models/props/chair`.
pub fn join_asset_path(segments: &[&str]) -> String {
    segments
        .iter()
        .flat_map(|segment| segment.split(['/', '\\']))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a model path into its game folder and its `models/...` relative path.
///
/// The first segment exactly equal to `models` is the anchor. Everything before
/// it is the game folder; the anchor onward is the relative path. Empty
/// segments are dropped from both, so repeated separators do not change the
/// root. A leading `/` (or `//` for network paths) is kept.
///
/// # Examples
///
/// ```ignore
/// let (root, relative) = split_model_path("C:/games/mygame/models/props/chair.mdl")?;
/// assert_eq!(root, "C:/games/mygame");
/// assert_eq!(relative, "models/props/chair.mdl");
/// ```
pub fn split_model_path(path: &str) -> Result<(String, String)> {
    let normalized = path.replace('\\', "/");
    let segments = normalized.split('/').collect::<Vec<_>>();
    let anchor = segments
        .iter()
        .position(|segment| *segment == MODELS_ANCHOR)
        .ok_or_else(|| invalid_model_path(path))?;

    let head = &segments[..anchor];
    let folder = join_asset_path(head);
    let prefix = if head.first() != Some(&"") {
        ""
    } else if normalized.starts_with("//") && !folder.is_empty() {
        "//"
    } else {
        "/"
    };
    let root = format!("{prefix}{folder}");
    let relative = join_asset_path(&segments[anchor..]);

    Ok((root, relative))
}

/// Location on disk of an asset `relative` to the game folder `root`.
pub fn asset_source_path(root: &str, relative: &str) -> PathBuf {
    if root.is_empty() {
        PathBuf::from(relative)
    } else if root.ends_with('/') {
        PathBuf::from(format!("{root}{relative}"))
    } else {
        PathBuf::from(format!("{root}/{relative}"))
    }
}

/// Check that a bundle name is a single usable folder name.
pub fn validate_bundle_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\', ':'])
    {
        return Err(invalid_bundle_name(name));
    }
    Ok(trimmed)
}
