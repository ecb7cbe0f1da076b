//! Error types for a single page fetch.
//!
//! # Design
//! Every step of a fetch (resolve, connect, write, read) fails with its own
//! variant so the failing operation is visible in the type. `kind()` folds the
//! variants back into the four categories an operator cares about. None of
//! them are fatal: `HttpFetcher::read_content` reports the error and returns
//! an empty body.

use std::io;

use thiserror::Error;

/// Errors returned by `HttpFetcher::fetch`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The caller supplied an empty host; no network I/O was attempted.
    #[error("empty host")]
    EmptyHost,

    #[error("failed to resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to connect to {host}: {source}")]
    Connect {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to send request: {0}")]
    Write(#[source] io::Error),

    /// Missing or garbled status line, a version token without the `HTTP/`
    /// prefix, or a header block cut short by end-of-stream.
    #[error("invalid response format")]
    InvalidResponse,

    /// Anything other than exactly 200.
    #[error("server returned an error code - {0}")]
    Status(u16),

    /// The body drain ended with something other than a clean end-of-stream.
    #[error("failed to read response body: {0}")]
    Read(#[source] io::Error),

    #[error("timed out waiting for the server")]
    Timeout,

    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
}

/// Coarse grouping of `FetchError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Resolution, connect, and request write failures.
    Connection,
    /// The peer did not answer with a recognisable HTTP response.
    Protocol,
    /// A well-formed response with a non-200 status.
    Rejected,
    /// The body drain did not end in a clean end-of-stream.
    Stream,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::EmptyHost
            | FetchError::Resolve { .. }
            | FetchError::Connect { .. }
            | FetchError::Write(_) => ErrorKind::Connection,
            FetchError::InvalidResponse => ErrorKind::Protocol,
            FetchError::Status(_) => ErrorKind::Rejected,
            FetchError::Read(_) | FetchError::Timeout | FetchError::BodyTooLarge { .. } => {
                ErrorKind::Stream
            }
        }
    }

    /// Map an I/O error raised while reading from the peer. Socket read
    /// timeouts surface as `WouldBlock` on Unix and `TimedOut` on Windows.
    pub(crate) fn from_read(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => FetchError::Timeout,
            _ => FetchError::Read(err),
        }
    }
}
