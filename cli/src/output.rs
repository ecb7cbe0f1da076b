//! Ranked word list writers.

use std::io::{self, Write};

use urlcounter_core::WordCount;

use crate::args::OutputFormat;

/// One `word<TAB>count` line per entry, in ranked order.
pub fn write_tsv<W: Write>(words: &[WordCount], mut out: W) -> io::Result<()> {
    for entry in words {
        writeln!(out, "{}\t{}", entry.word, entry.count)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(words: &[WordCount], mut out: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut out, words)?;
    writeln!(out).map_err(serde_json::Error::io)
}

pub fn write_ranked<W: Write>(words: &[WordCount], format: OutputFormat, out: W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Tsv => write_tsv(words, out)?,
        OutputFormat::Json => write_json(words, out)?,
    }
    Ok(())
}
