//! Subscriber setup: operator messages on stderr, full trace in a file.

use std::io;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Build a subscriber that prints `WARN` and above to stderr and writes every
/// event allowed by `RUST_LOG` (default `debug`) to `trace`.
pub fn subscriber<W>(trace: W) -> impl Subscriber + Send + Sync + 'static
where
    W: io::Write + Send + 'static,
{
    let trace_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time()
                .with_filter(LevelFilter::WARN),
        )
        .with(
            fmt::layer()
                .with_writer(Mutex::new(trace))
                .with_ansi(false)
                .with_filter(trace_filter),
        )
}
