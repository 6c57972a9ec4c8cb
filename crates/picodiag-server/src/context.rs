//! Server context injected at startup.

use picodiag_core::{DiagnosticSources, Led};

/// Everything handlers can touch, owned by the connection loop.
///
/// The diagnostic sources and the LED controller are injected once at
/// construction time and handed to handlers by the loop; there are no
/// ambient globals.
pub struct AppContext {
    pub sources: DiagnosticSources,
    pub led: Box<dyn Led>,
}

impl AppContext {
    pub fn new(sources: DiagnosticSources, led: Box<dyn Led>) -> Self {
        Self { sources, led }
    }
}
