//! Hand-built PNG encoding for square gradient icons.

use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};

use crate::chunk::{create_chunk, ChunkType, MAX_CHUNK_LEN};
use crate::error::EncodeError;
use crate::gradient;

/// The eight bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const BIT_DEPTH: u8 = 8;
/// Truecolor RGB, no alpha.
pub const COLOR_TYPE_RGB: u8 = 2;

/// Fixed-layout image header for an 8-bit RGB, non-interlaced image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
}

impl ImageHeader {
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// The 13-byte IHDR payload.
    pub fn to_bytes(&self) -> [u8; 13] {
        let mut data = [0u8; 13];
        data[0..4].copy_from_slice(&self.width.to_be_bytes());
        data[4..8].copy_from_slice(&self.height.to_be_bytes());
        data[8] = BIT_DEPTH;
        data[9] = COLOR_TYPE_RGB;
        // compression, filter and interlace methods stay 0
        data
    }
}

/// Encode a `size` x `size` gradient icon as a complete PNG byte stream.
pub fn create_png(size: u32) -> Result<Vec<u8>, EncodeError> {
    if size == 0 {
        return Err(EncodeError::InvalidDimension(size));
    }
    if gradient::raw_len(size, size) > MAX_CHUNK_LEN as u64 {
        return Err(EncodeError::DimensionTooLarge { size });
    }

    let ihdr = create_chunk(ChunkType::IHDR, &ImageHeader::square(size).to_bytes());

    let raw = gradient::scanlines(size, size);
    let compressed = deflate(&raw)?;
    if compressed.len() > MAX_CHUNK_LEN {
        return Err(EncodeError::ChunkTooLarge {
            kind: ChunkType::IDAT,
            len: compressed.len(),
        });
    }
    let idat = create_chunk(ChunkType::IDAT, &compressed);

    let iend = create_chunk(ChunkType::IEND, &[]);

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + ihdr.len() + idat.len() + iend.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    png.extend_from_slice(&ihdr);
    png.extend_from_slice(&idat);
    png.extend_from_slice(&iend);
    Ok(png)
}

/// Compress with a zlib wrapper (RFC 1950) at the default level.
fn deflate(raw: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}
