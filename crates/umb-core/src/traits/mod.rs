//! Collaborator interfaces for the setup flow
//!
//! The host's ambient services are modeled as injected traits so the
//! orchestration logic in [`crate::setup`] can run against real
//! implementations or test doubles alike.

mod environment;
mod installer;
mod lifecycle;

pub use environment::Environment;
pub use installer::Installer;
pub use lifecycle::LifecycleManager;
