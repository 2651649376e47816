//! Bridge listener
//!
//! Accepts loopback TCP connections for the bridge. The wire protocol is
//! a separate layer; this listener only accepts, logs, and drains peers
//! so clients can probe that the bridge is up.

use std::net::SocketAddr;

use tokio::io;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use umb_core::error::LifecycleError;

/// A running bridge listener: the accept loop plus its shutdown handle
#[derive(Debug)]
pub struct BridgeListener {
    local_addr: SocketAddr,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl BridgeListener {
    /// Bind `bind_addr` and start the accept loop
    pub async fn spawn(bind_addr: &str) -> Result<Self, LifecycleError> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|source| LifecycleError::Bind {
                addr: bind_addr.to_string(),
                source,
            })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| LifecycleError::Bind {
                addr: bind_addr.to_string(),
                source,
            })?;

        let cancel = CancellationToken::new();
        let accept_cancel = cancel.clone();
        let task = tokio::spawn(async move {
            accept_loop(listener, accept_cancel).await;
        });

        tracing::info!("Bridge listening on {}", local_addr);

        Ok(Self {
            local_addr,
            cancel,
            task,
        })
    }

    /// Address the listener actually bound
    ///
    /// Differs from the configured address when binding port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting and wait for the accept loop to exit
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            tracing::warn!("Listener task ended abnormally: {}", e);
        }
        tracing::info!("Bridge listener on {} stopped", self.local_addr);
    }
}

async fn accept_loop(listener: TcpListener, cancel: CancellationToken) {
    loop {
        tokio::select! {
            // Check for shutdown
            _ = cancel.cancelled() => {
                tracing::debug!("Bridge listener shutting down");
                break;
            }

            // Accept new connections
            result = listener.accept() => {
                match result {
                    Ok((socket, peer_addr)) => {
                        handle_connection(socket, peer_addr, cancel.clone());
                    }
                    Err(e) => {
                        tracing::error!("Failed to accept connection: {}", e);
                    }
                }
            }
        }
    }
}

/// Spawn a per-connection task that drains the peer until it closes
fn handle_connection(socket: TcpStream, peer_addr: SocketAddr, cancel: CancellationToken) {
    // Only accept connections from localhost
    if !peer_addr.ip().is_loopback() {
        tracing::warn!("Rejected non-localhost connection from {}", peer_addr);
        return;
    }

    tracing::info!("Bridge client connected from {}", peer_addr);

    tokio::spawn(async move {
        let mut socket = socket;
        let mut sink = io::sink();

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Dropping bridge client {}", peer_addr);
            }
            result = io::copy(&mut socket, &mut sink) => {
                match result {
                    Ok(bytes) => {
                        tracing::info!(
                            "Bridge client {} disconnected ({} bytes discarded)",
                            peer_addr,
                            bytes
                        );
                    }
                    Err(e) => {
                        tracing::warn!("Bridge client {} closed with error: {}", peer_addr, e);
                    }
                }
            }
        }
    });
}
