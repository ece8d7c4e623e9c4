use anyhow::Result;
use clap::Parser;
use lgtm_icons::icon_gen::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(args)
}
