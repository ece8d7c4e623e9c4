//! Encode the LGTM browser extension's gradient icons as PNG files.
//!
//! The PNG stream is assembled by hand: signature, `IHDR`, a zlib-compressed
//! `IDAT` and `IEND`, each chunk checksummed with CRC-32.

pub mod chunk;
pub mod crc;
pub mod data_url;
pub mod error;
pub mod gradient;
pub mod icon_gen;
pub mod manifest_json;
pub mod png;

pub use error::EncodeError;
pub use png::create_png;
