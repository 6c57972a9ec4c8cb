//! HTTP/1.0 request parsing.
//!
//! A request is parsed from exactly one read of up to
//! [`MAX_REQUEST_BYTES`] off an accepted connection. The grammar is
//! `<METHOD> <PATH>[?<QUERY>] <VERSION>` followed by CRLF-or-LF
//! terminated header lines and a blank terminator line. The version is
//! read but unused; header lines are kept raw and in order.

use thiserror::Error;

/// Hard cap on the bytes read for a single request.
///
/// Requests whose header block exceeds this are truncated at the socket
/// and will fail to parse (no blank terminator). Known limitation.
pub const MAX_REQUEST_BYTES: usize = 1024;

/// Errors raised while parsing a request.
///
/// A zero-byte read is [`RequestError::Empty`], which the connection
/// loop treats as a benign disconnect rather than a protocol violation.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The peer closed the connection without sending anything.
    #[error("empty request")]
    Empty,

    /// The request bytes are not valid UTF-8.
    #[error("request is not valid utf-8")]
    Encoding(#[from] std::str::Utf8Error),

    /// The request line is missing the method, URI, or version token.
    #[error("malformed request line: '{0}'")]
    MalformedRequestLine(String),

    /// The header block never reached a blank terminator line.
    #[error("header block has no blank terminator line")]
    MissingTerminator,
}

/// One parsed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// First token of the request line, e.g. `GET`.
    pub method: String,
    /// URI up to the first `?`.
    pub path: String,
    /// Everything after the first `?`. Empty when the URI has no `?`,
    /// never absent.
    pub query: String,
    /// Raw header lines, unparsed, insertion order preserved.
    pub headers: Vec<String>,
}

impl Request {
    /// Parse a request from the raw bytes of a single read.
    pub fn parse(raw: &[u8]) -> Result<Self, RequestError> {
        if raw.is_empty() {
            return Err(RequestError::Empty);
        }

        let text = std::str::from_utf8(raw)?;
        let mut lines = text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

        let request_line = lines.next().unwrap_or("");
        let mut tokens = request_line.split_whitespace();
        let method = tokens
            .next()
            .ok_or_else(|| RequestError::MalformedRequestLine(request_line.to_string()))?;
        let uri = tokens
            .next()
            .ok_or_else(|| RequestError::MalformedRequestLine(request_line.to_string()))?;
        // Version token is required by the grammar but otherwise unused.
        let _version = tokens
            .next()
            .ok_or_else(|| RequestError::MalformedRequestLine(request_line.to_string()))?;

        let mut headers = Vec::new();
        let mut terminated = false;
        for line in lines {
            if line.is_empty() {
                terminated = true;
                break;
            }
            headers.push(line.to_string());
        }
        if !terminated {
            return Err(RequestError::MissingTerminator);
        }

        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, query),
            None => (uri, ""),
        };

        Ok(Self {
            method: method.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            headers,
        })
    }
}
