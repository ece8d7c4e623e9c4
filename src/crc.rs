//! CRC-32 (IEEE 802.3, reflected polynomial `0xEDB88320`) as used by PNG chunks.

const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Lookup table for byte-at-a-time CRC updates, evaluated at compile time.
pub static CRC_TABLE: [u32; 256] = make_crc_table();

/// Build the 256-entry table: each index folded through 8 shift/xor rounds.
pub const fn make_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 {
                POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Incremental CRC-32 register.
///
/// Lets a chunk checksum cover the type code and payload without copying
/// them into one buffer first.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    register: u32,
}

impl Crc32 {
    pub fn new() -> Self {
        Self {
            register: 0xFFFF_FFFF,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.register;
        for &byte in data {
            crc = (crc >> 8) ^ CRC_TABLE[((crc ^ byte as u32) & 0xFF) as usize];
        }
        self.register = crc;
    }

    pub fn finalize(self) -> u32 {
        self.register ^ 0xFFFF_FFFF
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard CRC-32 of `data`.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(data);
    crc.finalize()
}
