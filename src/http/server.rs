//! A running movie server with graceful shutdown.
//!
//! ```ignore
//! let store = Arc::new(MoviesStore::new());
//! let server = MoviesServer::start(store, "127.0.0.1:0").await?;
//! println!("listening on {}", server.local_addr());
//! server.stop().await?;
//! ```

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use super::routes::router;
use crate::store::MoviesStore;

/// Handle to a server task. Call [`stop`](MoviesServer::stop) to shut it
/// down and wait; dropping the handle only signals shutdown.
pub struct MoviesServer {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<io::Result<()>>>,
}

impl MoviesServer {
    /// Bind `addr` and start serving the movie routes in a background task.
    ///
    /// Binding port 0 picks a free port; read it back with
    /// [`local_addr`](MoviesServer::local_addr).
    pub async fn start<A: ToSocketAddrs>(store: Arc<MoviesStore>, addr: A) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = router(store);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    // A dropped sender counts as a shutdown request too.
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(%local_addr, "movie server started");

        Ok(MoviesServer {
            local_addr,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signal shutdown and wait for in-flight requests to finish.
    pub async fn stop(mut self) -> io::Result<()> {
        self.signal_stop();
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))??;
        }
        info!(local_addr = %self.local_addr, "movie server stopped");
        Ok(())
    }

    /// Signal shutdown without waiting.
    pub fn signal_stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MoviesServer {
    fn drop(&mut self) {
        self.signal_stop();
    }
}
