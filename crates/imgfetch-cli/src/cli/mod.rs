//! CLI for imgfetch.

mod commands;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::config;
use std::path::PathBuf;

use commands::run_fetch;

/// Fetch images from URLs into a local directory, skipping content already saved.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Fetch images from URLs, skipping duplicates", long_about = None)]
pub struct Cli {
    /// Image URLs (each may be a comma-separated list). Prompts on stdin when omitted.
    pub urls: Vec<String>,

    /// Directory to save images into (default: ./Fetched_Images).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read settings from this TOML file instead of ~/.config/imgfetch/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_default()?,
        };
        if let Some(dir) = cli.output_dir {
            cfg.output_dir = dir;
        }
        tracing::debug!("effective config: {:?}", cfg);

        run_fetch(&cfg, &cli.urls)
    }
}

#[cfg(test)]
mod tests;
