//! Core domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Filesystem location of the installed companion server's source directory
///
/// Produced by an [`Installer`](crate::traits::Installer) and recorded
/// verbatim: no validation happens on this side, so an empty or relative
/// value passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerPath(pub String);

impl ServerPath {
    /// Create a new server path
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the raw path string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ServerPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServerPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&Path> for ServerPath {
    fn from(p: &Path) -> Self {
        Self(p.to_string_lossy().into_owned())
    }
}

/// Observable state of the bridge listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListenerState {
    /// Accept loop is active
    Running,
    /// No listener is bound
    Stopped,
}

impl fmt::Display for ListenerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenerState::Running => write!(f, "running"),
            ListenerState::Stopped => write!(f, "stopped"),
        }
    }
}
