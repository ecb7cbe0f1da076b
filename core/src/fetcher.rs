//! Blocking single-shot page fetcher.
//!
//! # Design
//! One `fetch` owns one `TcpStream` from connect to drop; nothing is pooled or
//! reused. The request/response exchange is generic over `Read + Write` so the
//! wire handling can be tested without a socket. Timeouts and the body size
//! cap are opt-in through `FetchConfig`; the defaults block until the peer
//! closes the connection.

use std::io::{self, BufReader, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, error};

use crate::error::FetchError;
use crate::http::{read_response, HttpRequest, HttpResponse, HTTP_PORT};

/// Tuning knobs for `HttpFetcher`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Port to connect to. Defaults to 80.
    pub port: u16,
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
    pub write_timeout: Option<Duration>,
    /// Upper bound on the drained body; `None` drains without limit.
    pub max_body_bytes: Option<usize>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            port: HTTP_PORT,
            connect_timeout: None,
            read_timeout: None,
            write_timeout: None,
            max_body_bytes: None,
        }
    }
}

/// Fetches the root page of a host over plain HTTP/1.0.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the page body, or an empty string on any failure.
    ///
    /// Failures are reported as `ERROR` events; an empty host is skipped
    /// silently.
    pub fn read_content(&self, host: &str) -> String {
        match self.fetch(host) {
            Ok(body) => body,
            Err(FetchError::EmptyHost) => {
                debug!("empty host, nothing to fetch");
                String::new()
            }
            Err(err) => {
                error!(host, kind = ?err.kind(), "{err}");
                String::new()
            }
        }
    }

    /// Fetch the page body, reporting which step failed.
    pub fn fetch(&self, host: &str) -> Result<String, FetchError> {
        if host.is_empty() {
            return Err(FetchError::EmptyHost);
        }
        let stream = self.connect(host)?;
        let response = exchange(stream, host, self.config.max_body_bytes)?;
        Ok(response.body)
    }

    fn connect(&self, host: &str) -> Result<TcpStream, FetchError> {
        debug!(host, port = self.config.port, "connecting");
        let addrs: Vec<SocketAddr> = (host, self.config.port)
            .to_socket_addrs()
            .map_err(|source| FetchError::Resolve {
                host: host.to_string(),
                source,
            })?
            .collect();
        if addrs.is_empty() {
            return Err(FetchError::Resolve {
                host: host.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
            });
        }

        let mut last_err = None;
        for addr in addrs {
            let attempt = match self.config.connect_timeout {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt.and_then(|stream| self.apply_timeouts(stream)) {
                Ok(stream) => {
                    debug!(%addr, "connected");
                    return Ok(stream);
                }
                Err(e) => {
                    debug!(%addr, error = %e, "connect attempt failed");
                    last_err = Some(e);
                }
            }
        }
        Err(FetchError::Connect {
            host: host.to_string(),
            source: last_err
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no address connected")),
        })
    }

    fn apply_timeouts(&self, stream: TcpStream) -> io::Result<TcpStream> {
        stream.set_read_timeout(self.config.read_timeout)?;
        stream.set_write_timeout(self.config.write_timeout)?;
        Ok(stream)
    }
}

/// Send the fixed request for `host` over `stream` and read the response.
///
/// The stream is consumed and dropped when this returns.
pub fn exchange<S: Read + Write>(
    mut stream: S,
    host: &str,
    max_body_bytes: Option<usize>,
) -> Result<HttpResponse, FetchError> {
    let request = HttpRequest::get_root(host);
    debug!(host, "sending request");
    stream
        .write_all(&request.to_bytes())
        .and_then(|()| stream.flush())
        .map_err(FetchError::Write)?;

    let mut reader = BufReader::new(stream);
    read_response(&mut reader, max_body_bytes)
}
