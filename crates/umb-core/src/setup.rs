//! The setup action
//!
//! Orchestrates the one administrative flow the bridge exposes: restart
//! the listener, resolve the installed companion server, publish its path
//! for other tooling, and nudge the host's file index. Collaborators are
//! injected, so hosts and tests decide what actually backs each step.

use std::path::PathBuf;

use crate::error::{BridgeError, MarkerError};
use crate::marker;
use crate::traits::{Environment, Installer, LifecycleManager};
use crate::types::ServerPath;

/// What happened to the marker during a setup run
#[derive(Debug)]
pub enum MarkerOutcome {
    /// Marker written at this path; the index refresh was requested
    Written(PathBuf),
    /// Directory creation or the write failed; recovered and logged, any
    /// previous marker content was left untouched
    Failed(MarkerError),
}

impl MarkerOutcome {
    /// Whether the marker file was written
    pub fn is_written(&self) -> bool {
        matches!(self, MarkerOutcome::Written(_))
    }
}

/// Report of a completed setup run
#[derive(Debug)]
pub struct SetupReport {
    /// Companion server location the installer resolved
    pub server_path: ServerPath,
    /// Marker publication result
    pub marker: MarkerOutcome,
}

/// One-shot orchestrator for the setup flow
///
/// Steps run strictly in sequence, each only after the previous one
/// finished. Repeated runs converge to the same state: the listener ends
/// up running and the marker holds the most recently resolved path.
pub struct SetupOrchestrator<'a, L, I, E> {
    lifecycle: &'a L,
    installer: &'a I,
    environment: &'a E,
    data_root: PathBuf,
}

impl<'a, L, I, E> SetupOrchestrator<'a, L, I, E>
where
    L: LifecycleManager,
    I: Installer,
    E: Environment,
{
    /// Bind the orchestrator to its collaborators and the project data root
    pub fn new(
        lifecycle: &'a L,
        installer: &'a I,
        environment: &'a E,
        data_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            lifecycle,
            installer,
            environment,
            data_root: data_root.into(),
        }
    }

    /// Run the setup flow once
    ///
    /// Listener and resolution failures propagate untouched. Filesystem
    /// failures while publishing the marker are recovered here: logged
    /// once with the offending path and reported in the returned
    /// [`SetupReport`]. The index refresh happens only after a successful
    /// write.
    pub async fn run(&self) -> Result<SetupReport, BridgeError> {
        // A failed restart is fatal; nothing below runs or masks it.
        self.lifecycle.restart().await?;

        let server_path = self.installer.resolve_server_path()?;
        tracing::info!("Companion server directory: {}", server_path);

        let marker = match marker::publish(&self.data_root, &server_path) {
            Ok(path) => {
                tracing::info!("Recorded server path at {}", path.display());
                self.environment.refresh_index();
                MarkerOutcome::Written(path)
            }
            Err(e) => {
                // Stale or missing marker content is acceptable; the
                // failure surfaces through this one log line only.
                tracing::error!("{}", e);
                MarkerOutcome::Failed(e)
            }
        };

        Ok(SetupReport {
            server_path,
            marker,
        })
    }
}
