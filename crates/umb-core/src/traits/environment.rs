//! Host environment trait

/// Host services the setup flow touches after publishing the marker
pub trait Environment: Send + Sync {
    /// Make the host's file index pick up newly created or changed files
    ///
    /// Best effort by contract; the infallible signature encodes that a
    /// refresh is assumed not to fail.
    fn refresh_index(&self);
}
