//! Error taxonomy for the connection loop.
//!
//! Everything that can end one connection early is a typed variant. The
//! loop applies the same recovery to all of them (close the socket,
//! log, continue) but logs each kind distinctly.

use std::net::SocketAddr;

use picodiag_http::RequestError;
use thiserror::Error;

/// A route handler failed while producing its response.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

/// Anything that can end one connection early.
///
/// All variants are connection-scoped and recovered at the loop
/// boundary; none of them stop the server.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The peer closed the connection without sending a request.
    /// Benign; not a protocol violation.
    #[error("client disconnected before sending a request")]
    Disconnected,

    /// The request could not be parsed.
    #[error("protocol violation: {0}")]
    Protocol(RequestError),

    /// A matched handler failed.
    #[error("handler failed: {0}")]
    Handler(#[from] HandlerError),

    /// Reading the request or writing the response failed.
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RequestError> for ConnectionError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Empty => ConnectionError::Disconnected,
            other => ConnectionError::Protocol(other),
        }
    }
}

/// Startup failures. These abort the process.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_maps_to_benign_disconnect() {
        let err: ConnectionError = RequestError::Empty.into();
        assert!(matches!(err, ConnectionError::Disconnected));
    }

    #[test]
    fn test_parse_failure_maps_to_protocol_violation() {
        let err: ConnectionError = RequestError::MissingTerminator.into();
        assert!(matches!(
            err,
            ConnectionError::Protocol(RequestError::MissingTerminator)
        ));
    }
}
