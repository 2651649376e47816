//! Companion server discovery
//!
//! Finds the installed UnityMcpServer source directory on this machine.
//! Discovery only: installing or updating the server is out of scope, so
//! resolution never fails just because the directory is absent.

use std::path::PathBuf;

use umb_core::error::InstallError;
use umb_core::traits::Installer;
use umb_core::types::ServerPath;

/// Locates the companion server on disk
///
/// Resolution order: an explicit override wins unconditionally, then the
/// first install root that actually contains the server. When nothing is
/// found, the primary candidate is still returned so the setup flow
/// always has a path to record; the missing install is only a warning.
pub struct ServerLocator {
    override_path: Option<PathBuf>,
    roots: Vec<PathBuf>,
}

impl ServerLocator {
    /// Locator probing the platform's well-known install roots
    pub fn new(override_path: Option<PathBuf>) -> Result<Self, InstallError> {
        Ok(Self {
            override_path,
            roots: default_roots()?,
        })
    }

    /// Locator probing the given roots instead of the platform defaults
    pub fn with_roots(override_path: Option<PathBuf>, roots: Vec<PathBuf>) -> Self {
        Self {
            override_path,
            roots,
        }
    }

    fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.roots
            .iter()
            .map(|root| root.join("UnityMcpServer").join("src"))
    }
}

/// Well-known install roots, most specific first
fn default_roots() -> Result<Vec<PathBuf>, InstallError> {
    let home = dirs::home_dir().ok_or(InstallError::NoInstallRoots)?;

    let mut roots = vec![home.join(".local"), home.join(".local").join("share")];
    if let Some(data_local) = dirs::data_local_dir() {
        if !roots.contains(&data_local) {
            roots.push(data_local);
        }
    }
    #[cfg(unix)]
    roots.push(PathBuf::from("/usr/local"));

    Ok(roots)
}

impl Installer for ServerLocator {
    fn resolve_server_path(&self) -> Result<ServerPath, InstallError> {
        if let Some(path) = &self.override_path {
            tracing::debug!("Using configured server directory {}", path.display());
            return Ok(ServerPath::from(path.as_path()));
        }

        let mut primary: Option<PathBuf> = None;
        for candidate in self.candidates() {
            if candidate.is_dir() {
                tracing::debug!("Found companion server at {}", candidate.display());
                return Ok(ServerPath::from(candidate.as_path()));
            }
            primary.get_or_insert(candidate);
        }

        let fallback = primary.ok_or(InstallError::NoInstallRoots)?;
        tracing::warn!(
            "Companion server not found on disk; recording default location {}",
            fallback.display()
        );
        Ok(ServerPath::from(fallback.as_path()))
    }
}
