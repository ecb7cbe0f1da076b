//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use urlcounter_core::FetchConfig;

/// Host used when none is given on the command line.
pub const DEFAULT_HOST: &str = "www.yandex.ru";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word<TAB>count` line per entry.
    Tsv,
    /// A JSON array of `{"word", "count"}` objects.
    Json,
}

/// Count word frequency on the root page of a web site.
#[derive(Parser, Debug)]
#[command(name = "urlcounter", version)]
pub struct Args {
    /// Host name or IP address to download from.
    #[arg(env = "URLCOUNTER_HOST")]
    pub host: Option<String>,

    /// File the ranked word list is written to.
    #[arg(long, env = "URLCOUNTER_OUTPUT", default_value = "output.txt")]
    pub output: PathBuf,

    /// File the trace log is written to.
    #[arg(long, env = "URLCOUNTER_TRACE", default_value = "trace.txt")]
    pub trace: PathBuf,

    #[arg(long, value_enum, env = "URLCOUNTER_FORMAT", default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    #[arg(long, env = "URLCOUNTER_PORT", default_value_t = urlcounter_core::http::HTTP_PORT)]
    pub port: u16,

    #[arg(long, env = "URLCOUNTER_CONNECT_TIMEOUT_MS")]
    pub connect_timeout_ms: Option<u64>,

    #[arg(long, env = "URLCOUNTER_READ_TIMEOUT_MS")]
    pub read_timeout_ms: Option<u64>,

    #[arg(long, env = "URLCOUNTER_WRITE_TIMEOUT_MS")]
    pub write_timeout_ms: Option<u64>,

    /// Abort the download once the body grows past this many bytes.
    #[arg(long, env = "URLCOUNTER_MAX_BODY_BYTES")]
    pub max_body_bytes: Option<usize>,
}

impl Args {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            port: self.port,
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            read_timeout: self.read_timeout_ms.map(Duration::from_millis),
            write_timeout: self.write_timeout_ms.map(Duration::from_millis),
            max_body_bytes: self.max_body_bytes,
        }
    }
}
