//! Listener lifecycle trait

use async_trait::async_trait;

use crate::error::LifecycleError;

/// Owner of the bridge listener's stop/start cycle
///
/// Restart is unconditional: callers never query the current state first,
/// they just ask for a fresh listener. A failure here is fatal to the
/// invoking flow and is not recovered locally.
#[async_trait]
pub trait LifecycleManager: Send + Sync {
    /// Stop any running listener, then start a new one
    async fn restart(&self) -> Result<(), LifecycleError>;
}
