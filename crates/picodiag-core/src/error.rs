//! Shared error type for diagnostic sources.

use thiserror::Error;

/// Errors a diagnostic source can report.
///
/// Every collaborator trait returns `Result<_, SourceError>` so the
/// aggregator can treat local probes and remote fetches uniformly.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading a local device or file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A remote request failed (transport, timeout, or bad status).
    #[error("remote request failed: {0}")]
    Remote(String),

    /// A remote payload did not have the expected shape.
    #[error("malformed payload: {0}")]
    Payload(String),

    /// The source exists but cannot produce a value right now.
    #[error("{0}")]
    Unavailable(String),
}
