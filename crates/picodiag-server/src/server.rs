//! The blocking accept loop.

use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};

use socket2::{Domain, Protocol, Socket, Type};
use tracing::{debug, info, warn};

use picodiag_http::{Request, Response, MAX_REQUEST_BYTES};

use crate::context::AppContext;
use crate::error::{ConnectionError, ServeError};
use crate::router::Router;

/// The single-connection HTTP server.
///
/// Strictly single-threaded, synchronous, blocking I/O: the loop blocks
/// on accept, then on read, then runs the handler in-line. A second
/// incoming connection waits until the current one is fully closed.
pub struct HttpServer {
    listener: TcpListener,
    router: Router,
    ctx: AppContext,
}

impl HttpServer {
    /// Bind the listening socket.
    ///
    /// Address reuse is enabled so the process can be re-run while the
    /// previous listening socket's address is still in TIME_WAIT. The
    /// backlog is 1: connections are handled strictly sequentially, so
    /// there is no point queueing more in the kernel.
    pub fn bind(addr: SocketAddr, router: Router, ctx: AppContext) -> Result<Self, ServeError> {
        let bind = |addr: SocketAddr| -> std::io::Result<TcpListener> {
            let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
            socket.set_reuse_address(true)?;
            socket.bind(&addr.into())?;
            socket.listen(1)?;
            Ok(socket.into())
        };

        let listener = bind(addr).map_err(|source| ServeError::Bind { addr, source })?;
        Ok(Self {
            listener,
            router,
            ctx,
        })
    }

    /// The bound address (useful when binding port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept and serve connections forever.
    ///
    /// Every per-connection error is recovered here: the socket is
    /// closed, the failure is logged by kind, and the loop moves on to
    /// the next accept. A single misbehaving client never stops the
    /// server.
    pub fn run(mut self) -> ! {
        loop {
            let (stream, peer) = match self.listener.accept() {
                Ok(accepted) => accepted,
                Err(err) => {
                    warn!("accept failed: {}", err);
                    continue;
                }
            };

            if let Err(err) = self.handle_connection(stream, peer) {
                match err {
                    ConnectionError::Disconnected => {
                        debug!("client at '{}' disconnected", peer.ip())
                    }
                    err => warn!("connection closed: {}", err),
                }
            }
        }
    }

    /// Drive one accepted connection to a response.
    ///
    /// The stream is dropped (and the socket closed) on every path out
    /// of this function, success or error.
    fn handle_connection(
        &mut self,
        mut stream: TcpStream,
        peer: SocketAddr,
    ) -> Result<(), ConnectionError> {
        let mut buf = [0u8; MAX_REQUEST_BYTES];
        let read = stream.read(&mut buf)?;
        let request = Request::parse(&buf[..read])?;

        info!(
            "client at '{}' requests '{}' with query '{}'",
            peer.ip(),
            request.path,
            request.query
        );

        let response = match self.router.lookup(&request.path) {
            Some(handler) => handler(&mut self.ctx, &request)?,
            None => Response::not_found(&request.path),
        };

        response.write_to(&mut stream)?;
        Ok(())
    }
}
