//! Command-line front end for `urlcounter-core`.
//!
//! # Overview
//! Parses arguments, opens the trace file for the duration of one run,
//! fetches and ranks the page, and writes the ranked list to the output file.
//!
//! # Design
//! - The trace file is owned by a subscriber installed with
//!   `tracing::subscriber::with_default`; it is closed when `run` returns.
//! - A failed fetch is not an error here: the output file is simply empty.
//!   Only failures to create the trace or output files are reported as `Err`.

pub mod args;
pub mod logging;
pub mod output;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use tracing::info;
use urlcounter_core::{HttpFetcher, WordRanker};

pub use args::{Args, OutputFormat, DEFAULT_HOST};

/// Fetch, rank and write results for `args`. Returns the number of distinct
/// words written.
pub fn run(args: &Args) -> anyhow::Result<usize> {
    let trace = File::create(&args.trace)
        .with_context(|| format!("failed to create trace file {}", args.trace.display()))?;
    tracing::subscriber::with_default(logging::subscriber(trace), || execute(args))
}

fn execute(args: &Args) -> anyhow::Result<usize> {
    let host = args.host();
    info!(host, "starting download");

    let body = HttpFetcher::new(args.fetch_config()).read_content(host);
    let ranked = WordRanker::new().rank(&body);
    info!(bytes = body.len(), words = ranked.len(), "page ranked");

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create output file {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    output::write_ranked(&ranked, args.format, &mut out)?;
    out.flush()
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(ranked.len())
}
