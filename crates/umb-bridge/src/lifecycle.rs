//! Bridge lifecycle management
//!
//! Owns stop/start of the bridge listener. Restart is unconditional:
//! whatever ran before is stopped first, in this process by cancelling
//! the accept loop, in a previous process by way of its pid file. Only
//! then is a fresh listener bound.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use umb_core::error::LifecycleError;
use umb_core::pidfile::{self, PidFileGuard};
use umb_core::traits::LifecycleManager;
use umb_core::types::ListenerState;

use crate::listener::BridgeListener;

/// How long a previous instance gets to exit after being signalled
const TAKEOVER_WAIT: Duration = Duration::from_secs(5);

/// Poll interval while waiting for a previous instance to exit
const TAKEOVER_POLL: Duration = Duration::from_millis(100);

/// Lifecycle manager backed by the real bridge listener
pub struct BridgeLifecycle {
    bind_addr: String,
    pid_path: PathBuf,
    inner: Mutex<Inner>,
}

/// Listener and pid file travel together: both set while running,
/// both cleared while stopped.
#[derive(Default)]
struct Inner {
    listener: Option<BridgeListener>,
    pid_guard: Option<PidFileGuard>,
}

impl BridgeLifecycle {
    /// Create a lifecycle manager for the given bind address and pid file
    pub fn new(bind_addr: impl Into<String>, pid_path: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            pid_path: pid_path.into(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Current listener state
    pub async fn state(&self) -> ListenerState {
        if self.inner.lock().await.listener.is_some() {
            ListenerState::Running
        } else {
            ListenerState::Stopped
        }
    }

    /// Address of the running listener, if any
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        self.inner
            .lock()
            .await
            .listener
            .as_ref()
            .map(|l| l.local_addr())
    }

    /// Stop the listener if one is running
    pub async fn shutdown(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(listener) = inner.listener.take() {
            listener.shutdown().await;
        }
        inner.pid_guard = None;
    }

    /// Stop a bridge left behind by a previous invocation, if any
    async fn stop_stale_instance(&self) -> Result<(), LifecycleError> {
        let pid = match pidfile::read(&self.pid_path) {
            Ok(Some(pid)) => pid,
            Ok(None) => return Ok(()),
            Err(source) => {
                return Err(LifecycleError::PidFile {
                    path: self.pid_path.clone(),
                    source,
                })
            }
        };

        // Our own record, nothing to take over
        if pid == std::process::id() {
            return Ok(());
        }

        if !pidfile::is_alive(pid) {
            tracing::debug!("Removing pid file of dead bridge instance {}", pid);
            let _ = pidfile::remove(&self.pid_path);
            return Ok(());
        }

        tracing::info!("Stopping previous bridge instance (pid {})", pid);
        pidfile::terminate(pid).map_err(|source| LifecycleError::Terminate { pid, source })?;

        let deadline = tokio::time::Instant::now() + TAKEOVER_WAIT;
        while pidfile::is_alive(pid) {
            if tokio::time::Instant::now() >= deadline {
                return Err(LifecycleError::StaleInstance { pid });
            }
            tokio::time::sleep(TAKEOVER_POLL).await;
        }

        let _ = pidfile::remove(&self.pid_path);
        Ok(())
    }
}

#[async_trait]
impl LifecycleManager for BridgeLifecycle {
    async fn restart(&self) -> Result<(), LifecycleError> {
        let mut inner = self.inner.lock().await;

        // Stop whatever is currently running, ours or a predecessor's,
        // before binding. Rebinding the same address depends on this
        // ordering.
        if let Some(listener) = inner.listener.take() {
            listener.shutdown().await;
        } else {
            self.stop_stale_instance().await?;
        }
        inner.pid_guard = None;

        let listener = BridgeListener::spawn(&self.bind_addr).await?;
        let guard = match PidFileGuard::new(self.pid_path.clone(), std::process::id()) {
            Ok(guard) => guard,
            Err(source) => {
                listener.shutdown().await;
                return Err(LifecycleError::PidFile {
                    path: self.pid_path.clone(),
                    source,
                });
            }
        };

        inner.listener = Some(listener);
        inner.pid_guard = Some(guard);
        Ok(())
    }
}
