use crate::data_url::{to_data_url, to_markdown};
use crate::manifest_json::{icon_file_name, write_manifest_json, MANIFEST_FILE_NAME};
use crate::png::create_png;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{fs::create_dir_all, path::PathBuf};

/// Icon sizes a browser extension needs: toolbar, management page, store.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Alt text used for Markdown output.
pub const MARKDOWN_ALT: &str = "LGTM";

#[derive(Debug, Parser)]
#[clap(
    name = "lgtm-icons",
    about = "Generate the LGTM extension's gradient icons as PNG files"
)]
pub struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    pub output: PathBuf,

    /// Icon sizes in pixels (square).
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_value = "16,48,128"
    )]
    pub sizes: Vec<u32>,

    /// Also print every icon to stdout in this format
    #[clap(long, value_enum, value_name = "FORMAT")]
    pub print: Option<PrintFormat>,

    /// Also write manifest-icons.json for the extension manifest
    #[clap(long)]
    pub manifest: bool,

    /// Suppress progress messages
    #[clap(short, long)]
    pub quiet: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("./icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            print: None,
            manifest: false,
            quiet: false,
        }
    }
}

/// Text form an icon can be copied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    /// `data:image/png;base64,...`
    DataUrl,
    /// `![LGTM](data:image/png;base64,...)`
    Markdown,
}

impl PrintFormat {
    pub fn render(self, png: &[u8]) -> String {
        match self {
            PrintFormat::DataUrl => to_data_url(png),
            PrintFormat::Markdown => to_markdown(MARKDOWN_ALT, png),
        }
    }
}

/// A rendered icon, ready to be written.
#[derive(Debug, Clone)]
pub struct Icon {
    pub size: u32,
    pub png: Vec<u8>,
}

pub fn generate_icons(args: Args) -> Result<()> {
    let sizes = unique_sizes(&args.sizes);
    anyhow::ensure!(!sizes.is_empty(), "At least one icon size is required");

    // Encode everything first so a bad size leaves no partial output behind
    let icons = encode_icons(&sizes)?;

    create_dir_all(&args.output).context("Can't create output directory")?;

    if !args.quiet {
        println!("Generating icons...");
    }
    for icon in &icons {
        let filename = icon_file_name(icon.size);
        let output_path = args.output.join(&filename);
        std::fs::write(&output_path, &icon.png)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        if !args.quiet {
            println!("  ✓ Generated {filename}");
        }
    }

    if args.manifest {
        write_manifest_json(&args.output, &sizes)?;
        if !args.quiet {
            println!("  ✓ Generated {MANIFEST_FILE_NAME}");
        }
    }

    if let Some(format) = args.print {
        for icon in &icons {
            println!("{}", format.render(&icon.png));
        }
    }

    Ok(())
}

/// Encode one icon per size, failing on the first size that can't be encoded.
pub fn encode_icons(sizes: &[u32]) -> Result<Vec<Icon>> {
    sizes
        .iter()
        .map(|&size| {
            let png =
                create_png(size).with_context(|| format!("Failed to encode {size}x{size} icon"))?;
            Ok(Icon { size, png })
        })
        .collect()
}

/// Drop repeated sizes, keeping the first occurrence of each.
fn unique_sizes(sizes: &[u32]) -> Vec<u32> {
    let mut unique = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if !unique.contains(&size) {
            unique.push(size);
        }
    }
    unique
}
