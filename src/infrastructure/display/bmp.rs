//! Uncompressed 8-bit bitmap encoding of a framebuffer.
//!
//! Layout: 14-byte file header, 40-byte info header, then pixel rows from the
//! bottom of the panel to the top, each padded to a multiple of four bytes.

use std::io::Write;
use std::path::Path;

use crate::error::MenuResult;

use super::framebuffer::Framebuffer;

pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
/// Offset of the first pixel byte
pub const PIXEL_OFFSET: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;
pub const BITS_PER_PIXEL: u16 = 8;

/// Bytes per stored row
pub fn row_stride(width: u32) -> usize {
    (width as usize + 3) & !3
}

/// Encode `fb` as a complete bitmap file
pub fn encode(fb: &Framebuffer) -> Vec<u8> {
    let stride = row_stride(fb.width());
    let image_size = stride * fb.height() as usize;
    let file_size = PIXEL_OFFSET + image_size;

    let mut out = Vec::with_capacity(file_size);

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&(PIXEL_OFFSET as u32).to_le_bytes());

    // Info header; positive height means rows are stored bottom-up
    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&(fb.width() as i32).to_le_bytes());
    out.extend_from_slice(&(fb.height() as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    let padding = stride - fb.width() as usize;
    for y in (0..fb.height()).rev() {
        out.extend_from_slice(fb.row(y));
        out.resize(out.len() + padding, 0);
    }

    out
}

/// Encode `fb` and replace `path` with the result.
///
/// The bitmap is written to a temporary file next to `path` and renamed over
/// it, so readers never observe a half-written frame.
pub fn write(path: &Path, fb: &Framebuffer) -> MenuResult<()> {
    let bytes = encode(fb);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Fields read back from an encoded bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub pixel_offset: u32,
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: u16,
}

impl BmpHeader {
    /// Parse the two headers; `None` if the bytes are not a bitmap
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < PIXEL_OFFSET || &bytes[0..2] != b"BM" {
            return None;
        }
        let u32_at = |at: usize| -> Option<u32> {
            Some(u32::from_le_bytes(bytes[at..at + 4].try_into().ok()?))
        };
        let i32_at = |at: usize| -> Option<i32> {
            Some(i32::from_le_bytes(bytes[at..at + 4].try_into().ok()?))
        };
        let u16_at = |at: usize| -> Option<u16> {
            Some(u16::from_le_bytes(bytes[at..at + 2].try_into().ok()?))
        };

        Some(Self {
            file_size: u32_at(2)?,
            pixel_offset: u32_at(10)?,
            width: i32_at(18)?,
            height: i32_at(22)?,
            bits_per_pixel: u16_at(28)?,
        })
    }
}
