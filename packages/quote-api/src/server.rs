//! Hyper server setup and request handling.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming as IncomingBody};
use hyper::{Request, Response};
use hyper_util::rt::TokioExecutor;
use hyper_util::rt::TokioIo;
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use tokio::net::TcpListener;

use crate::router::Router;

/// HTTP server for the quote API.
pub struct Server {
    addr: SocketAddr,
    router: Arc<Router>,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// # Arguments
    /// * `addr` - Socket address to bind to
    /// * `router` - Request router
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self {
            addr,
            router: Arc::new(router),
        }
    }

    /// Starts the HTTP server and stops accepting connections once
    /// `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()>,
    {
        let listener = TcpListener::bind(self.addr).await?;
        serve_listener(listener, self.router, shutdown).await
    }
}

/// Accepts connections on an already bound listener until `shutdown`
/// resolves. Connections in flight keep running on their own tasks.
pub async fn serve_listener<F>(
    listener: TcpListener,
    router: Arc<Router>,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()>,
{
    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    tokio::pin!(shutdown);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => accepted?,
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received, no longer accepting connections");
                return Ok(());
            }
        };
        let io = TokioIo::new(stream);
        let router = Arc::clone(&router);

        tokio::task::spawn(async move {
            let builder = ConnectionBuilder::new(TokioExecutor::new());
            if let Err(err) = builder
                .serve_connection(
                    io,
                    hyper::service::service_fn(move |req| handle_request(req, router.clone())),
                )
                .await
            {
                tracing::warn!("Error serving connection from {}: {}", peer, err);
            }
        });
    }
}

/// Handles an incoming HTTP request.
async fn handle_request(
    req: Request<IncomingBody>,
    router: Arc<Router>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = router.handle(req).await;
    Ok(response.map(Full::new))
}
