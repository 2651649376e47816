//! Core error types for the Unity MCP Bridge

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level error type for the bridge ecosystem
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Listener lifecycle error
    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// Server resolution error
    #[error("Install error: {0}")]
    Install(#[from] InstallError),

    /// Marker publication error
    #[error("Marker error: {0}")]
    Marker(#[from] MarkerError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while stopping or starting the bridge listener
///
/// Setup never recovers these locally; they propagate to whoever invoked
/// the command.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// Listener socket could not be bound
    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// A previous bridge instance was signalled but did not exit
    #[error("Previous bridge instance (pid {pid}) did not exit")]
    StaleInstance { pid: u32 },

    /// A previous bridge instance could not be signalled
    #[error("Failed to stop previous bridge instance (pid {pid}): {source}")]
    Terminate { pid: u32, source: std::io::Error },

    /// Pid file bookkeeping failed
    #[error("Pid file error at {}: {}", .path.display(), .source)]
    PidFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised while resolving the companion server location
///
/// Setup treats resolution as infallible in practice and defines no
/// recovery for these.
#[derive(Error, Debug)]
pub enum InstallError {
    /// No install roots to probe, usually a missing home directory
    #[error("No usable server install roots (home directory unavailable)")]
    NoInstallRoots,
}

/// Errors raised while publishing the server path marker
///
/// These are the only failures setup recovers locally: logged once with
/// the offending path, then the flow carries on.
#[derive(Error, Debug)]
pub enum MarkerError {
    /// Marker directory could not be created
    #[error("Failed to create marker directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Marker file could not be written
    #[error("Failed to write marker file {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl MarkerError {
    /// The filesystem path the failed operation was aimed at
    pub fn path(&self) -> &Path {
        match self {
            MarkerError::CreateDir { path, .. } => path,
            MarkerError::Write { path, .. } => path,
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Invalid configuration
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
