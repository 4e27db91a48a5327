//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Provides a builder for synthetic `.mdl` containers and helpers that lay out
//! a fake game directory (`<root>/models`, `<root>/materials`) in a temp dir.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{ModelBuilder, create_game_dir, create_test_files};
//!
//! #[test]
//! fn my_test() {
//!     let (temp, game_dir) = create_game_dir();
//!     let bytes = ModelBuilder::new("props").texture("chair").build();
//!     std::fs::write(game_dir.join("models/chair.mdl"), bytes).unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::format::mdl::{HEADER_TEXTURE_OFFSET, MAGIC, TextureRecord};

/// Builds a minimal model container with a texture directory table and a
/// texture table, laid out the way the decoder expects.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    magic: [u8; 4],
    version: u32,
    texture_dirs: Vec<String>,
    textures: Vec<String>,
}

impl ModelBuilder {
    /// Start a version 48 container with a single texture directory.
    #[must_use]
    pub fn new(texture_dir: &str) -> Self {
        Self {
            magic: MAGIC,
            version: 48,
            texture_dirs: vec![texture_dir.to_string()],
            textures: Vec::new(),
        }
    }

    #[must_use]
    pub fn magic(mut self, magic: [u8; 4]) -> Self {
        self.magic = magic;
        self
    }

    #[must_use]
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Replace the texture directory table.
    #[must_use]
    pub fn texture_dirs(mut self, dirs: &[&str]) -> Self {
        self.texture_dirs = dirs.iter().map(ToString::to_string).collect();
        self
    }

    /// Append one texture table entry.
    #[must_use]
    pub fn texture(mut self, name: &str) -> Self {
        self.textures.push(name.to_string());
        self
    }

    /// Serialize the container.
    ///
    /// Layout: header, directory offset table, texture table, then all strings.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let header_len = HEADER_TEXTURE_OFFSET as usize + 16;
        let dir_table = header_len;
        let texture_table = dir_table + 4 * self.texture_dirs.len();
        let strings = texture_table + TextureRecord::SIZE as usize * self.textures.len();

        let mut data = vec![0u8; strings];
        data[0..4].copy_from_slice(&self.magic);
        put_u32(&mut data, 4, self.version);
        put_u32(&mut data, HEADER_TEXTURE_OFFSET as usize, len_u32(self.textures.len()));
        put_u32(&mut data, HEADER_TEXTURE_OFFSET as usize + 4, len_u32(texture_table));
        put_u32(
            &mut data,
            HEADER_TEXTURE_OFFSET as usize + 8,
            len_u32(self.texture_dirs.len()),
        );
        put_u32(&mut data, HEADER_TEXTURE_OFFSET as usize + 12, len_u32(dir_table));

        for (i, dir) in self.texture_dirs.iter().enumerate() {
            let pos = data.len();
            push_cstring(&mut data, dir);
            put_u32(&mut data, dir_table + 4 * i, len_u32(pos));
        }

        for (i, name) in self.textures.iter().enumerate() {
            let record_start = texture_table + TextureRecord::SIZE as usize * i;
            let pos = data.len();
            push_cstring(&mut data, name);
            put_u32(&mut data, record_start, len_u32(pos - record_start));
        }

        data
    }
}

fn put_u32(data: &mut [u8], at: usize, value: u32) {
    data[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

fn push_cstring(data: &mut Vec<u8>, value: &str) {
    data.extend_from_slice(value.as_bytes());
    data.push(0);
}

fn len_u32(value: usize) -> u32 {
    u32::try_from(value).expect("synthetic container exceeds 4 GiB")
}

/// Absolute base for temp dirs, so a relative `TMPDIR` never lands them in the
/// working directory.
fn temp_dir_base() -> PathBuf {
    let base = std::env::temp_dir();
    if base.is_absolute() {
        base
    } else if cfg!(windows) {
        std::env::var_os("TEMP").map_or(base, PathBuf::from)
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a fake game directory (`<temp>/game`) with `models/` and `materials/`.
///
/// # Panics
///
/// Panics if any directory cannot be created.
#[must_use]
pub fn create_game_dir() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let game_dir = temp.path().join("game");
    std::fs::create_dir_all(game_dir.join("models")).expect("Failed to create models dir");
    std::fs::create_dir_all(game_dir.join("materials")).expect("Failed to create materials dir");
    (temp, game_dir)
}

/// Write one file under `base`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be created.
pub fn create_test_file(base: &Path, path: &str, content: impl AsRef<[u8]>) {
    let full_path = base.join(path);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&full_path, content).expect("Failed to write test file");
}

/// Create text files under a base directory.
///
/// Takes a list of (path, content) tuples. Paths are relative to `base`.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(base: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        create_test_file(base, path, content);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_game_dir() {
        let (_temp, game_dir) = create_game_dir();
        assert!(game_dir.join("models").is_dir());
        assert!(game_dir.join("materials").is_dir());
    }

    #[test]
    fn test_builder_header_fields() {
        let bytes = ModelBuilder::new("x").version(50).texture("brick").build();
        assert_eq!(&bytes[0..4], b"IDST");
        assert_eq!(u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), 50);
        assert!(bytes.ends_with(b"x\0brick\0"));
    }
}
