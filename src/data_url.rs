//! Copyable text forms of an encoded icon.

use base64::Engine;

pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode PNG bytes as a `data:` URL.
pub fn to_data_url(png: &[u8]) -> String {
    let mut url = String::from(PNG_DATA_URL_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(png, &mut url);
    url
}

/// A Markdown image embedding the PNG as a data URL.
pub fn to_markdown(alt: &str, png: &[u8]) -> String {
    format!("![{}]({})", alt, to_data_url(png))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_uses_padded_standard_alphabet() {
        assert_eq!(to_data_url(&[0xFB, 0xFF]), "data:image/png;base64,+/8=");
    }

    #[test]
    fn markdown_wraps_data_url() {
        let md = to_markdown("LGTM", b"png");
        assert_eq!(md, "![LGTM](data:image/png;base64,cG5n)");
    }
}
