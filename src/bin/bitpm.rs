//! bitpm - find every occurrence of a pattern in a text
//!
//! # Usage
//!
//! ```bash
//! # Offsets go to output_bitpm.txt, one per line
//! bitpm text.txt pattern.txt
//!
//! # Custom output, debug logging
//! bitpm text.txt pattern.txt --output hits.txt -vv
//! ```
//!
//! Only the first line of each input file is used.

use alice_bitpm::{find_all, io};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Default output artifact
const OUTPUT_FILE: &str = "output_bitpm.txt";

/// Shift-And exact pattern matching
#[derive(Parser)]
#[command(name = "bitpm")]
#[command(about = "Report every offset where PATTERN occurs in TEXT")]
#[command(version)]
struct Cli {
    /// File whose first line is the text
    text: PathBuf,

    /// File whose first line is the pattern
    pattern: PathBuf,

    /// Output file (one offset per line)
    #[arg(short, long, default_value = OUTPUT_FILE)]
    output: PathBuf,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let text = io::read_first_line(&cli.text)
        .with_context(|| format!("reading text from {}", cli.text.display()))?;
    let pattern = io::read_first_line(&cli.pattern)
        .with_context(|| format!("reading pattern from {}", cli.pattern.display()))?;
    debug!(text_len = text.len(), pattern_len = pattern.len(), "inputs loaded");

    let offsets = find_all(&text, &pattern).context("building matcher")?;

    io::write_offsets_file(&cli.output, &offsets)
        .with_context(|| format!("writing offsets to {}", cli.output.display()))?;

    info!(
        matches = offsets.len(),
        output = %cli.output.display(),
        "done"
    );
    Ok(())
}
