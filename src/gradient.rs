//! The icon background: a diagonal purple-to-blue gradient.

/// Color at the top-left corner (`t = 0`).
pub const START_COLOR: [u8; 3] = [102, 126, 234];

/// Color the gradient heads toward (`t = 1`).
pub const END_COLOR: [u8; 3] = [118, 75, 162];

/// PNG scanline filter type "None".
pub const FILTER_NONE: u8 = 0;

/// RGB color of the pixel at `(x, y)` in a `width` x `height` image.
///
/// Channels are truncated with `floor`, not rounded.
pub fn pixel_at(x: u32, y: u32, width: u32, height: u32) -> [u8; 3] {
    let t = (x as f64 + y as f64) / (width as f64 + height as f64);
    let mut rgb = [0u8; 3];
    for (channel, (&start, &end)) in rgb.iter_mut().zip(START_COLOR.iter().zip(&END_COLOR)) {
        let start = f64::from(start);
        let end = f64::from(end);
        *channel = (start + (end - start) * t).floor() as u8;
    }
    rgb
}

/// Length in bytes of the filtered scanline buffer for a `width` x `height` image.
pub fn raw_len(width: u32, height: u32) -> u64 {
    u64::from(height).saturating_mul(1 + 3 * u64::from(width))
}

/// Build the filtered scanline buffer: each row is a filter byte then RGB triples.
pub fn scanlines(width: u32, height: u32) -> Vec<u8> {
    let mut raw = Vec::with_capacity(raw_len(width, height) as usize);
    for y in 0..height {
        raw.push(FILTER_NONE);
        for x in 0..width {
            raw.extend_from_slice(&pixel_at(x, y, width, height));
        }
    }
    raw
}
