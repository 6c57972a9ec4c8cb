//! Exact-match route table.

use picodiag_http::{Request, Response};

use crate::context::AppContext;
use crate::error::HandlerError;
use crate::handlers;

/// A route handler. Handlers build a [`Response`] value; the connection
/// loop owns the socket write.
pub type HandlerFn = fn(&mut AppContext, &Request) -> Result<Response, HandlerError>;

/// An ordered set of exact-match path bindings.
///
/// Lookup is first-exact-match. No path falls through to a default;
/// unmatched paths get the not-found response from the loop. The table
/// is built once at startup and immutable afterwards.
pub struct Router {
    routes: Vec<(&'static str, HandlerFn)>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Bind a path to a handler. Order of calls is lookup order.
    pub fn route(mut self, path: &'static str, handler: HandlerFn) -> Self {
        self.routes.push((path, handler));
        self
    }

    /// First handler whose path matches exactly, if any.
    pub fn lookup(&self, path: &str) -> Option<HandlerFn> {
        self.routes
            .iter()
            .find(|(bound, _)| *bound == path)
            .map(|(_, handler)| *handler)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// The route table of the diagnostics server: `/` and `/led`.
pub fn default_router() -> Router {
    Router::new()
        .route("/", handlers::root)
        .route("/led", handlers::led)
}
