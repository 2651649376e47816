//! Standalone host plumbing
//!
//! When the bridge runs outside an editor there is no asset database to
//! refresh. The local stand-in re-lists the marker directory so the
//! freshly written file shows up in the next directory scan.

use std::path::PathBuf;

use umb_core::traits::Environment;

/// File-index stand-in for the standalone CLI host
pub struct LocalIndex {
    marker_dir: PathBuf,
}

impl LocalIndex {
    /// Index over the given marker directory
    pub fn new(marker_dir: PathBuf) -> Self {
        Self { marker_dir }
    }
}

impl Environment for LocalIndex {
    fn refresh_index(&self) {
        // Best effort by contract, so a failed listing is only debug noise
        match std::fs::read_dir(&self.marker_dir) {
            Ok(entries) => {
                let count = entries.filter_map(|e| e.ok()).count();
                tracing::debug!(
                    "Refreshed index of {} ({} entries)",
                    self.marker_dir.display(),
                    count
                );
            }
            Err(e) => {
                tracing::debug!(
                    "Index refresh skipped for {}: {}",
                    self.marker_dir.display(),
                    e
                );
            }
        }
    }
}
