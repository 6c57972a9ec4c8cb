//! The two page handlers.

use picodiag_core::DiagnosticsReport;
use picodiag_http::{Request, Response};

use crate::context::AppContext;
use crate::error::HandlerError;

/// Root diagnostics page: echoes the request, then renders the live
/// status block gathered from every diagnostic source.
pub fn root(ctx: &mut AppContext, req: &Request) -> Result<Response, HandlerError> {
    let report = DiagnosticsReport::gather(&ctx.sources);

    let body = format!(
        "<!DOCTYPE html><pre>hello from picodiag\n\n\
         path: {}\n\
         query: {}\n\
         headers: {:?}\n\n\
         {}",
        req.path,
        req.query,
        req.headers,
        report.render(),
    );

    Ok(Response::html(body))
}

/// LED toggle page: the LED is on iff the raw query contains the exact
/// token `led=1`. State is recomputed from the current request alone,
/// never carried over from earlier requests.
pub fn led(ctx: &mut AppContext, req: &Request) -> Result<Response, HandlerError> {
    let on = req.query.contains("led=1");
    ctx.led
        .set(on)
        .map_err(|err| HandlerError(format!("led: {}", err)))?;

    let checked = if on { " checked" } else { "" };
    let body = format!(
        "<!DOCTYPE html><title>LED</title>\n\
         <form>\n    \
         <input name=led type=checkbox value=1{}> LED\n    \
         <button type=submit>Apply</button>\n\
         </form>\n",
        checked,
    );

    Ok(Response::html(body))
}
