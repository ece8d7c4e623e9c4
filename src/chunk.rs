//! PNG chunk framing: `length ‖ type ‖ payload ‖ crc(type ‖ payload)`.

use std::fmt;

use crate::crc::Crc32;

/// Largest payload a PNG chunk may declare (2^31 - 1).
pub const MAX_CHUNK_LEN: usize = 0x7FFF_FFFF;

/// Bytes a chunk adds around its payload: length, type and CRC fields.
pub const CHUNK_OVERHEAD: usize = 12;

/// A four-byte ASCII chunk type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Serialize one chunk.
///
/// `data` must be at most [`MAX_CHUNK_LEN`] bytes; callers check this.
pub fn create_chunk(kind: ChunkType, data: &[u8]) -> Vec<u8> {
    debug_assert!(data.len() <= MAX_CHUNK_LEN);

    let mut crc = Crc32::new();
    crc.update(kind.as_bytes());
    crc.update(data);

    let mut out = Vec::with_capacity(data.len() + CHUNK_OVERHEAD);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind.as_bytes());
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
    out
}
