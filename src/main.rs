use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use asset_embed::OUTPUT_FILE_NAME;

/// Embed the bundled font assets into a C++ header
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run as if started in this directory instead of the current one
    #[arg(short = 'C', long)]
    directory: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let directory = match args.directory {
        Some(directory) => directory,
        None => std::env::current_dir().context("Failed to retrieve current directory")?,
    };

    asset_embed::generate(&directory).with_context(|| format!("Failed to generate {OUTPUT_FILE_NAME}"))?;

    println!("Generated {OUTPUT_FILE_NAME}!");
    Ok(())
}
