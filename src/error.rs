use std::io;

use crate::chunk::ChunkType;

/// Errors from PNG icon encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("invalid icon size {0}: size must be at least 1 pixel")]
    InvalidDimension(u32),

    #[error("icon size {size} is too large: scanline data would exceed the PNG chunk limit")]
    DimensionTooLarge { size: u32 },

    #[error("{kind} payload of {len} bytes exceeds the PNG chunk limit")]
    ChunkTooLarge { kind: ChunkType, len: usize },

    #[error("zlib compression failed")]
    Compression(#[from] io::Error),
}
