//! Default command: collect URLs, run the fetch loop, print per-URL results.

use anyhow::{Context, Result};
use imgfetch_core::config::FetcherConfig;
use imgfetch_core::fetcher::{Fetcher, UrlOutcome, UrlReport};
use imgfetch_core::http::CurlSource;
use imgfetch_core::url_model::split_url_list;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to the Ubuntu Image Fetcher\n\
A tool for mindfully collecting images from the web\n";
const PROMPT: &str = "Please enter one or more image URLs (comma-separated): ";
const CLOSING: &str = "\nConnection strengthened. Community enriched.";

/// A line destined for stdout or stderr.
#[derive(Debug, PartialEq, Eq)]
enum Message {
    Out(String),
    Err(String),
}

pub fn run_fetch(cfg: &FetcherConfig, args: &[String]) -> Result<()> {
    println!("{}", WELCOME);

    let urls = if args.is_empty() {
        let line = prompt_line(&mut io::stdin().lock(), &mut io::stdout())?;
        split_url_list(&line)
    } else {
        args.iter().flat_map(|a| split_url_list(a)).collect()
    };
    tracing::info!("processing {} urls", urls.len());

    let source = CurlSource::from_config(cfg);
    let mut fetcher = Fetcher::open(source, &cfg.output_dir)?;
    tracing::info!("saving into {}", fetcher.output_dir().display());
    fetcher.run(&urls, |entry| {
        for msg in render(entry) {
            match msg {
                Message::Out(s) => println!("{}", s),
                Message::Err(s) => eprintln!("{}", s),
            }
        }
    });

    println!("{}", CLOSING);
    Ok(())
}

/// Prints the prompt and reads one line. End of input reads as an empty line.
fn prompt_line(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read URLs from stdin")?;
    Ok(line)
}

fn render(entry: &UrlReport) -> Vec<Message> {
    let url = &entry.url;
    match &entry.outcome {
        UrlOutcome::Saved { path } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            vec![
                Message::Out(format!("✓ Successfully fetched: {}", name)),
                Message::Out(format!("✓ Image saved to {}", path.display())),
            ]
        }
        UrlOutcome::Duplicate => vec![Message::Out(format!(
            "✗ Duplicate image detected, skipping: {}",
            url
        ))],
        UrlOutcome::NotImage { .. } => vec![Message::Err(format!(
            "✗ URL does not point to an image: {}",
            url
        ))],
        UrlOutcome::Failed(e) if e.is_connection() => vec![Message::Err(format!(
            "✗ Connection error for URL {}: {}",
            url, e
        ))],
        UrlOutcome::Failed(e) => vec![Message::Err(format!(
            "✗ An error occurred for URL {}: {}",
            url, e
        ))],
    }
}
