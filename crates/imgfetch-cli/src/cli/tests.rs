//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_args_prompts() {
    let cli = parse(&["imgfetch"]);
    assert!(cli.urls.is_empty());
    assert!(cli.output_dir.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_positional_urls() {
    let cli = parse(&[
        "imgfetch",
        "https://example.com/a.png,https://example.com/b.png",
        "https://example.com/c.jpg",
    ]);
    assert_eq!(
        cli.urls,
        vec![
            "https://example.com/a.png,https://example.com/b.png",
            "https://example.com/c.jpg"
        ]
    );
}

#[test]
fn cli_parse_output_dir_and_config() {
    let cli = parse(&[
        "imgfetch",
        "--output-dir",
        "/tmp/pics",
        "--config",
        "/etc/imgfetch.toml",
        "https://example.com/a.png",
    ]);
    assert_eq!(cli.output_dir.as_deref(), Some(Path::new("/tmp/pics")));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/imgfetch.toml")));
    assert_eq!(cli.urls, vec!["https://example.com/a.png"]);
}

#[test]
fn cli_parse_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["imgfetch", "--retries", "3"]).is_err());
}
