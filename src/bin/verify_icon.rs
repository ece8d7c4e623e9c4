use anyhow::{Context, Result};
use lgtm_icons::gradient::{pixel_at, START_COLOR};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icons/icon128.png".to_string());

    let img = image::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .to_rgb8();
    let (width, height) = img.dimensions();

    println!("Checking gradient icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let top_left = img.get_pixel(0, 0).0;
    let bottom_right = img.get_pixel(width - 1, height - 1).0;
    let expected_bottom_right = pixel_at(width - 1, height - 1, width, height);

    println!("\nCorner pixels:");
    println!("  top-left     RGB: {:?} (expected {:?})", top_left, START_COLOR);
    println!(
        "  bottom-right RGB: {:?} (expected {:?})",
        bottom_right, expected_bottom_right
    );

    if top_left == START_COLOR && bottom_right == expected_bottom_right {
        println!("✓ Gradient matches!");
        Ok(())
    } else {
        anyhow::bail!("⚠ Gradient does not match the LGTM icon colors")
    }
}
