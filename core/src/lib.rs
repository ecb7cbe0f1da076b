//! Page fetching and word ranking core for `urlcounter`.
//!
//! # Overview
//! `HttpFetcher` downloads the root page of a host over plain HTTP/1.0 and
//! returns the body text. `WordRanker` strips markup from that text, counts
//! words and returns them ordered by frequency. The two share no state; the
//! caller passes the body string from one to the other.
//!
//! # Design
//! - One blocking TCP connection per fetch, closed when the fetch returns.
//! - The body ends when the peer closes the connection (`Connection: close`).
//! - Every fetch step has its own `FetchError` variant; `read_content`
//!   collapses them into an empty string after reporting.
//! - Ranking is deterministic: count descending, then word ascending.

pub mod error;
pub mod fetcher;
pub mod http;
pub mod ranker;

pub use error::{ErrorKind, FetchError};
pub use fetcher::{FetchConfig, HttpFetcher};
pub use http::{HttpRequest, HttpResponse, ResponseStatus};
pub use ranker::{WordCount, WordFrequencyTable, WordRanker};
