//! Command-line entry point for html-localizer.
//!
//! Usage: html-localizer <HTML_FILE> [-o OUTPUT_DIR] [-a ASSETS_DIR]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use html_localizer::utils::DEFAULT_ASSETS_DIR;
use html_localizer::{HtmlLocalizer, LocalizeConfig, RunStats};

/// Localize the external dependencies of an HTML file.
#[derive(Parser)]
#[command(name = "html-localizer", version, about)]
struct Cli {
    /// Path of the HTML file to process
    html_file: PathBuf,

    /// Output directory (default: the input file's directory)
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Name of the assets subdirectory
    #[arg(short = 'a', long, default_value = DEFAULT_ASSETS_DIR)]
    assets_dir: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if !cli.html_file.exists() {
        println!("Error: file {} does not exist", cli.html_file.display());
        return;
    }

    let config = LocalizeConfig::new(cli.html_file, cli.output_dir, Some(cli.assets_dir));
    let assets_dir = config.assets_dir();

    match run(config).await {
        Ok((output_file, stats)) => {
            println!("\n{stats}");
            println!("\nLocalized HTML saved as: {}", output_file.display());
            println!("Assets saved in: {}", assets_dir.display());
        }
        Err(e) => {
            // Full chain (and backtrace when enabled), per-resource
            // failures were already logged and counted.
            println!("Error during processing: {e:?}");
        }
    }
}

async fn run(config: LocalizeConfig) -> Result<(PathBuf, RunStats)> {
    let mut localizer = HtmlLocalizer::new(config)?;
    let output_file = localizer.process().await?;
    Ok((output_file, localizer.stats()))
}
