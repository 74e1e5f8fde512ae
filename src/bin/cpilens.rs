//! cpilens: Summarize integration-platform API responses
//!
//! Reads response envelopes (`{"status": .., "data": ..}` or
//! `{"error": ..}`) and prints the same readable summary the console shows.
//!
//! Usage:
//!   # Read one envelope from a file
//!   cpilens response.json
//!
//!   # Read from stdin
//!   echo '{"error": "unauthorized"}' | cpilens
//!
//!   # One envelope per line, dump the normalized view instead of text
//!   cpilens --ndjson responses.jsonl --view

// Use MiMalloc allocator (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use cpilens::{extract, format_readable};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "cpilens")]
#[command(about = "Summarize integration-platform API responses", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Process every envelope: one per line, or every element of a top-level array
    #[arg(long)]
    ndjson: bool,

    /// Print the normalized view as JSON instead of the summary text
    #[arg(long)]
    view: bool,

    /// Log pipeline decisions to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let reader = if let Some(file_path) = &args.input {
        let file = File::open(file_path).with_context(|| format!("Failed to open {}", file_path))?;
        Box::new(BufReader::new(file)) as Box<dyn Read>
    } else {
        Box::new(std::io::stdin()) as Box<dyn Read>
    };

    let mut content = Vec::new();
    BufReader::new(reader)
        .read_to_end(&mut content)
        .context("Failed to read input")?;

    let envelopes = parse_envelopes(content, !args.ndjson)?;
    if envelopes.is_empty() {
        tracing::warn!("no JSON envelopes found in input");
    }

    let mut stdout = std::io::stdout().lock();
    for (idx, raw) in envelopes.iter().enumerate() {
        if idx > 0 {
            writeln!(stdout)?;
        }
        writeln!(stdout, "{}", render(raw, args.view)?)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "cpilens=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render(raw: &Value, as_view: bool) -> Result<String> {
    let view = extract(raw);
    tracing::debug!(kind = view.kind(), "normalized envelope");
    if as_view {
        serde_json::to_string_pretty(&view).context("Failed to serialize view")
    } else {
        Ok(format_readable(&view))
    }
}

/// Split input into envelopes using SIMD-accelerated parsing when possible.
///
/// A whole-document parse wins; a top-level array is a stream of
/// envelopes. Otherwise the input is read as newline-delimited JSON.
fn parse_envelopes(content: Vec<u8>, stop_after_first: bool) -> Result<Vec<Value>> {
    // simd-json parses in place, keep the original bytes for the fallback
    let mut buffer = content.clone();

    let mut envelopes = match simd_json::serde::from_slice::<Value>(&mut buffer) {
        Ok(Value::Array(arr)) => arr,
        Ok(value) => vec![value],
        Err(_) => {
            let content_str = String::from_utf8_lossy(&content);
            let mut values = Vec::new();
            for (line_no, line) in content_str.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let value: Value = serde_json::from_str(line)
                    .with_context(|| format!("Failed to parse JSON on line {}", line_no + 1))?;
                values.push(value);

                if stop_after_first {
                    break;
                }
            }
            values
        }
    };

    if stop_after_first {
        envelopes.truncate(1);
    }

    Ok(envelopes)
}
