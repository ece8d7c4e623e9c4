//! Browser-extension manifest fragment for generated icons
//!
//! This module defines the `"icons"` and `"action.default_icon"` members of a
//! WebExtension `manifest.json`, so the generated files can be pasted straight
//! into the extension's manifest.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// File name the fragment is written to inside the output directory
pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// Root structure of the manifest fragment
///
/// Keys of both maps are pixel sizes; serde_json writes them as strings
/// ("16", "48", ...), which is what browsers expect.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestIcons {
    /// Extension icons shown on the management page and in the store
    pub icons: BTreeMap<u32, String>,

    /// Toolbar button configuration
    pub action: Action,
}

/// The `"action"` member of the manifest
#[derive(Serialize, Debug, Clone, Default)]
pub struct Action {
    /// Icons drawn on the toolbar button
    pub default_icon: BTreeMap<u32, String>,
}

impl ManifestIcons {
    /// Creates an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an icon under `size`, pointing at `path` relative to the extension root
    pub fn add_icon(&mut self, size: u32, path: String) {
        self.icons.insert(size, path.clone());
        self.action.default_icon.insert(size, path);
    }
}

/// Path of an icon inside the extension package, e.g. `icons/icon16.png`
pub fn extension_icon_path(size: u32) -> String {
    format!("icons/{}", icon_file_name(size))
}

/// File name an icon of `size` pixels is written to
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Writes the fragment to `dir/manifest-icons.json`
///
/// # Errors
/// Returns an error if serialization or the file write fails
pub fn write_manifest_json(dir: &Path, sizes: &[u32]) -> Result<()> {
    let mut manifest = ManifestIcons::new();
    for &size in sizes {
        manifest.add_icon(size, extension_icon_path(size));
    }

    let json = serde_json::to_string_pretty(&manifest)
        .context("Failed to serialize manifest icons")?;
    std::fs::write(dir.join(MANIFEST_FILE_NAME), json)
        .with_context(|| format!("Failed to write {MANIFEST_FILE_NAME}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_paths() {
        assert_eq!(icon_file_name(16), "icon16.png");
        assert_eq!(extension_icon_path(128), "icons/icon128.png");
    }

    #[test]
    fn test_add_icon_fills_both_maps() {
        let mut manifest = ManifestIcons::new();
        manifest.add_icon(48, extension_icon_path(48));

        assert_eq!(manifest.icons[&48], "icons/icon48.png");
        assert_eq!(manifest.action.default_icon[&48], "icons/icon48.png");
    }

    #[test]
    fn test_serialization_uses_string_keys_in_size_order() {
        let mut manifest = ManifestIcons::new();
        for size in [128, 16, 48] {
            manifest.add_icon(size, extension_icon_path(size));
        }

        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"icons":{"16":"icons/icon16.png","48":"icons/icon48.png","128":"icons/icon128.png"},"#,
                r#""action":{"default_icon":{"16":"icons/icon16.png","48":"icons/icon48.png","128":"icons/icon128.png"}}}"#
            )
        );
    }

    #[test]
    fn test_write_manifest_json() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        write_manifest_json(temp_dir.path(), &[16, 48]).unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join(MANIFEST_FILE_NAME)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["icons"]["16"], "icons/icon16.png");
        assert_eq!(parsed["action"]["default_icon"]["48"], "icons/icon48.png");
        assert!(parsed["icons"].get("128").is_none());
    }
}
