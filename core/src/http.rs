//! HTTP/1.0 wire format: the fixed request and the response reader.
//!
//! # Design
//! Requests are plain data turned into bytes with `to_bytes`; responses are
//! read from any `BufRead`, so everything here can be exercised against an
//! in-memory cursor. The socket itself lives in `fetcher`.
//!
//! The body is drained until the peer closes the stream. That is only a valid
//! end-of-body signal because the request carries `Connection: close`;
//! `Content-Length` and chunked encoding are deliberately ignored.

use std::io::{self, BufRead, Read};

use tracing::debug;

use crate::error::FetchError;

/// Standard HTTP port.
pub const HTTP_PORT: u16 = 80;

const CHUNK_SIZE: usize = 8 * 1024;

/// An HTTP/1.0 `GET` request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// The single request a fetch sends: `GET /` with `Host`, `Accept` and
    /// `Connection: close`.
    pub fn get_root(host: &str) -> Self {
        Self {
            path: "/".to_string(),
            headers: vec![
                ("Host".to_string(), host.to_string()),
                ("Accept".to_string(), "*/*".to_string()),
                ("Connection".to_string(), "close".to_string()),
            ],
        }
    }

    /// Serialize to CRLF-delimited wire bytes, terminated by a blank line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!("GET {} HTTP/1.0\r\n", self.path);
        for (name, value) in &self.headers {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("\r\n");
        }
        out.push_str("\r\n");
        out.into_bytes()
    }
}

/// The parsed status line of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStatus {
    pub version: String,
    pub code: u16,
    pub message: String,
}

impl ResponseStatus {
    /// Parse `<version> <code> <message...>`. The version token must start
    /// with `HTTP/` and the code must be an unsigned integer.
    pub fn parse(line: &str) -> Result<Self, FetchError> {
        let mut tokens = line.split_whitespace();
        let version = tokens.next().ok_or(FetchError::InvalidResponse)?;
        let code = tokens
            .next()
            .and_then(|c| c.parse::<u16>().ok())
            .ok_or(FetchError::InvalidResponse)?;
        if !version.starts_with("HTTP/") {
            return Err(FetchError::InvalidResponse);
        }
        Ok(Self {
            version: version.to_string(),
            code,
            message: tokens.collect::<Vec<_>>().join(" "),
        })
    }
}

/// A successful response: status 200 and the drained body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: ResponseStatus,
    pub body: String,
}

/// Read a full response: status line, header block, then the body until
/// end-of-stream. Any status other than 200 is rejected before the headers
/// are read.
pub fn read_response<R: BufRead>(
    reader: &mut R,
    max_body_bytes: Option<usize>,
) -> Result<HttpResponse, FetchError> {
    let status = read_status(reader)?;
    debug!(version = %status.version, code = status.code, "parsed status line");
    if status.code != 200 {
        return Err(FetchError::Status(status.code));
    }

    skip_headers(reader)?;
    debug!("header block skipped, draining body");

    let body = drain_body(reader, max_body_bytes)?;
    debug!(bytes = body.len(), "body drained");
    Ok(HttpResponse {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// Read up to the first line terminator and parse it as a status line.
pub fn read_status<R: BufRead>(reader: &mut R) -> Result<ResponseStatus, FetchError> {
    let mut line = Vec::new();
    let n = reader.read_until(b'\n', &mut line).map_err(FetchError::from_read)?;
    if n == 0 || !line.ends_with(b"\n") {
        return Err(FetchError::InvalidResponse);
    }
    ResponseStatus::parse(&String::from_utf8_lossy(&line))
}

/// Discard header lines up to and including the empty line that ends the
/// header block. A bare `\n` is accepted as well as `\r\n`.
pub fn skip_headers<R: BufRead>(reader: &mut R) -> Result<(), FetchError> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).map_err(FetchError::from_read)?;
        if n == 0 {
            return Err(FetchError::InvalidResponse);
        }
        if line == b"\r\n" || line == b"\n" {
            return Ok(());
        }
    }
}

/// Drain `reader` until a clean end-of-stream.
///
/// Stops early with `BodyTooLarge` once more than `max_bytes` would be
/// buffered, and with `Timeout` when a configured socket read timeout fires.
pub fn drain_body<R: Read>(reader: &mut R, max_bytes: Option<usize>) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(body),
            Ok(n) => {
                if let Some(limit) = max_bytes {
                    if body.len() + n > limit {
                        return Err(FetchError::BodyTooLarge { limit });
                    }
                }
                body.extend_from_slice(&chunk[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FetchError::from_read(e)),
        }
    }
}
