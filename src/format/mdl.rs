//! Compiled model (`.mdl`) container decoding.
//!
//! Only the part of the studio header needed to find material references is read:
//! the magic, the version, and the texture and texture-directory tables.
//! See <https://developer.valvesoftware.com/wiki/MDL_(Source)>.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use super::reader::FieldReader;
use crate::error::Result;
use crate::error::container::{ambiguous_material_folder, malformed, unsupported_version};
use crate::error::fs::open_failed;
use crate::path_utils::join_asset_path;

/// Container signature.
pub const MAGIC: [u8; 4] = *b"IDST";

/// Supported studio header versions (TF2 through Titanfall).
pub const SUPPORTED_VERSIONS: RangeInclusive<u32> = 48..=52;

/// Offset of `numtextures` in the studio header. Followed by `textureindex`,
/// `numcdtextures` and `cdtextureindex`.
pub const HEADER_TEXTURE_OFFSET: u64 = 0xCC;

/// Top-level folder every material lives under.
pub const MATERIALS_DIR: &str = "materials";

/// One texture table entry (`mstudiotexture_t`), 16 little-endian 4-byte fields.
///
/// | offset | field         | meaning                                       |
/// |--------|---------------|-----------------------------------------------|
/// | 0      | `name_offset` | name string, relative to the record start     |
/// | 4      | `flags`       |                                               |
/// | 8      | `used`        |                                               |
/// | 12     | `unused`      |                                               |
/// | 16..64 | reserved      | runtime material pointers and padding         |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRecord {
    pub name_offset: i32,
    pub flags: u32,
}

impl TextureRecord {
    /// Record stride in bytes.
    pub const SIZE: u64 = 64;

    /// Decode a record from its raw bytes.
    pub fn from_bytes(raw: &[u8; Self::SIZE as usize]) -> Self {
        Self {
            name_offset: i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
            flags: u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]),
        }
    }

    /// Absolute position of the name string for a record starting at `record_start`.
    ///
    /// Returns `None` when the position would fall before the start of the file.
    pub fn name_position(&self, record_start: u64) -> Option<u64> {
        record_start.checked_add_signed(i64::from(self.name_offset))
    }
}

/// A decoded model container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAsset {
    pub source_path: PathBuf,
    pub version: u32,
    pub texture_dirs: Vec<String>,
    /// Material paths relative to the game folder, without extension, in
    /// texture table order.
    pub materials: Vec<String>,
}

impl ModelAsset {
    /// Open and decode a model file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| open_failed(path, &e))?;
        Self::decode(path, BufReader::new(file))
    }

    /// Decode a model container from a seekable stream.
    pub fn decode<R: Read + Seek>(source_path: &Path, stream: R) -> Result<Self> {
        let source = source_path.display().to_string();
        let mut reader = FieldReader::new(stream, source.clone())?;

        let magic = reader.read_magic()?;
        if magic != MAGIC {
            return Err(malformed(
                source,
                format!("expected magic {MAGIC:?}, found {magic:?}"),
            ));
        }

        let version = reader.read_u32(None)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(unsupported_version(source, version));
        }

        let [texture_count, texture_offset, dir_count, dir_offset] =
            reader.read_u32_array::<4>(Some(HEADER_TEXTURE_OFFSET))?;
        trace!(
            "{source}: v{version}, {texture_count} textures @ {texture_offset:#x}, \
             {dir_count} dirs @ {dir_offset:#x}"
        );

        if dir_count != 1 {
            return Err(ambiguous_material_folder(source, dir_count));
        }

        let texture_dirs = read_texture_dirs(&mut reader, dir_count, dir_offset)?;
        let names = read_texture_names(&mut reader, texture_count, texture_offset)?;

        let texture_dir = &texture_dirs[0];
        let materials = names
            .iter()
            .map(|name| join_asset_path(&[MATERIALS_DIR, texture_dir, name]))
            .collect::<Vec<_>>();

        debug!("Decoded {source}: {} materials", materials.len());

        Ok(Self {
            source_path: source_path.to_path_buf(),
            version,
            texture_dirs,
            materials,
        })
    }
}

fn read_texture_dirs<R: Read + Seek>(
    reader: &mut FieldReader<R>,
    count: u32,
    table_offset: u32,
) -> Result<Vec<String>> {
    let offsets = reader.read_fixed(Some(u64::from(table_offset)), 4, count as usize)?;

    offsets
        .into_iter()
        .map(|offset| reader.read_cstring(offset))
        .collect()
}

fn read_texture_names<R: Read + Seek>(
    reader: &mut FieldReader<R>,
    count: u32,
    table_offset: u32,
) -> Result<Vec<String>> {
    let table_start = u64::from(table_offset);
    let table_len = u64::from(count) * TextureRecord::SIZE;
    if table_start + table_len > reader.len() {
        return Err(malformed(
            reader.source().to_string(),
            format!("texture table of {count} records at {table_offset:#x} runs past end of file"),
        ));
    }

    reader.seek(table_start)?;
    let mut records = Vec::with_capacity(count as usize);
    let mut raw = [0u8; TextureRecord::SIZE as usize];
    for _ in 0..count {
        reader.read_bytes(&mut raw)?;
        records.push(TextureRecord::from_bytes(&raw));
    }

    let mut names = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let record_start = table_start + TextureRecord::SIZE * i as u64;
        let position = record
            .name_position(record_start)
            .filter(|&pos| pos < reader.len())
            .ok_or_else(|| {
                malformed(
                    reader.source().to_string(),
                    format!(
                        "texture {i} name offset {} from {record_start:#x} is out of bounds",
                        record.name_offset
                    ),
                )
            })?;
        trace!(
            "texture {i}: name @ {position:#x}, flags {:#x}",
            record.flags
        );
        names.push(reader.read_cstring(position)?);
    }

    Ok(names)
}
