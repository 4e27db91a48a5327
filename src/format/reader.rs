//! Little-endian field reader over a seekable stream.
//!
//! Every read either starts at an absolute offset or at the current cursor and
//! moves the cursor forward. Callers re-seek before each logically absolute read.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::error::container::malformed;
use crate::error::material::decode_failed;
use crate::error::{MdlpackError, Result};

/// Reads fixed-width fields and C strings from a binary stream.
pub struct FieldReader<R> {
    inner: R,
    len: u64,
    source: String,
}

impl<R: Read + Seek> FieldReader<R> {
    /// Wrap a stream. `source` names the stream in error messages.
    pub fn new(mut inner: R, source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let len = inner
            .seek(SeekFrom::End(0))
            .map_err(|e| malformed(source.clone(), format!("cannot seek: {e}")))?;
        inner
            .seek(SeekFrom::Start(0))
            .map_err(|e| malformed(source.clone(), format!("cannot seek: {e}")))?;
        Ok(Self { inner, len, source })
    }

    /// Total length of the stream in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Name used for this stream in errors.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Move the cursor to an absolute offset.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if offset > self.len {
            return Err(self.out_of_bounds(offset));
        }
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(|e| malformed(self.source.clone(), format!("cannot seek to {offset:#x}: {e}")))?;
        Ok(())
    }

    /// Read `count` unsigned little-endian integers of `width` bytes each.
    ///
    /// Starts at `offset` when given, otherwise at the current position.
    /// `width` must be 1, 2, 4 or 8.
    pub fn read_fixed(&mut self, offset: Option<u64>, width: usize, count: usize) -> Result<Vec<u64>> {
        if !matches!(width, 1 | 2 | 4 | 8) {
            return Err(malformed(
                self.source.clone(),
                format!("unsupported field width {width}"),
            ));
        }
        if let Some(offset) = offset {
            self.seek(offset)?;
        }

        let mut fields = Vec::with_capacity(count);
        let mut buf = [0u8; 8];
        for _ in 0..count {
            self.fill(&mut buf[..width])?;
            fields.push(u64::from_le_bytes(buf));
            buf = [0u8; 8];
        }
        Ok(fields)
    }

    /// Read a single `u32`.
    pub fn read_u32(&mut self, offset: Option<u64>) -> Result<u32> {
        let [value] = self.read_u32_array::<1>(offset)?;
        Ok(value)
    }

    /// Read `N` consecutive `u32` fields.
    pub fn read_u32_array<const N: usize>(&mut self, offset: Option<u64>) -> Result<[u32; N]> {
        if let Some(offset) = offset {
            self.seek(offset)?;
        }
        let mut out = [0u32; N];
        let mut buf = [0u8; 4];
        for slot in &mut out {
            self.fill(&mut buf)?;
            *slot = u32::from_le_bytes(buf);
        }
        Ok(out)
    }

    /// Read exactly `buf.len()` bytes at the current position.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.fill(buf)
    }

    /// Read a 4-byte magic/tag at the current position.
    pub fn read_magic(&mut self) -> Result<[u8; 4]> {
        let mut magic = [0u8; 4];
        self.fill(&mut magic)?;
        Ok(magic)
    }

    /// Seek to `offset` and read a NUL-terminated UTF-8 string.
    pub fn read_cstring(&mut self, offset: u64) -> Result<String> {
        if offset >= self.len {
            return Err(self.out_of_bounds(offset));
        }
        self.seek(offset)?;

        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read_exact(&mut byte) {
                Ok(()) if byte[0] == 0 => break,
                Ok(()) => bytes.push(byte[0]),
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(malformed(
                        self.source.clone(),
                        format!("unterminated string at {offset:#x}"),
                    ));
                }
                Err(e) => return Err(e.into()),
            }
        }

        String::from_utf8(bytes).map_err(|e| {
            decode_failed(
                self.source.clone(),
                format!("string at {offset:#x} is not valid UTF-8: {e}"),
            )
        })
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                malformed(
                    self.source.clone(),
                    format!("truncated: needed {} more bytes", buf.len()),
                )
            } else {
                MdlpackError::from(e)
            }
        })
    }

    fn out_of_bounds(&self, offset: u64) -> MdlpackError {
        malformed(
            self.source.clone(),
            format!("offset {offset:#x} is outside the file ({} bytes)", self.len),
        )
    }
}
