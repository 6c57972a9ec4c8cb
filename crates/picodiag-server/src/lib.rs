//! # picodiag-server
//!
//! The embedded-style HTTP server: one listening socket, one connection
//! at a time, driven to a complete response or a logged failure,
//! forever.
//!
//! The loop accepts a client, reads at most
//! [`picodiag_http::MAX_REQUEST_BYTES`] bytes, parses the HTTP/1.0
//! request, dispatches by exact path match, writes the response, and
//! closes the connection on every exit path. All per-connection errors
//! are recovered at the loop boundary; only bind/listen failure at
//! startup is fatal.

pub mod context;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use context::AppContext;
pub use error::{ConnectionError, HandlerError, ServeError};
pub use router::{default_router, Router};
pub use server::HttpServer;
