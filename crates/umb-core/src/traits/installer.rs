//! Companion server location trait

use crate::error::InstallError;
use crate::types::ServerPath;

/// Locator for the installed companion server
///
/// How the server got onto the machine is out of scope here; this trait
/// only answers where it lives. Callers treat resolution as something
/// that always yields a path and define no recovery for errors.
pub trait Installer: Send + Sync {
    /// Resolve the path of the companion server's source directory
    fn resolve_server_path(&self) -> Result<ServerPath, InstallError>;
}
