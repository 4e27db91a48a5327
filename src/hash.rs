//! BLAKE3 hashing utilities for bundle output

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::Result;
use crate::error::fs::missing_dependency;

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let read_failed = |e: std::io::Error| missing_dependency(path.display().to_string(), e.to_string());

    let file = File::open(path).map_err(read_failed)?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(read_failed)?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Whether two files have identical contents
pub fn same_contents(a: &Path, b: &Path) -> Result<bool> {
    let (len_a, len_b) = (std::fs::metadata(a)?.len(), std::fs::metadata(b)?.len());
    if len_a != len_b {
        return Ok(false);
    }
    Ok(hash_file(a)? == hash_file(b)?)
}
