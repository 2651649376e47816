//! umb-bridge: the local bridge daemon
//!
//! Listener lifecycle and companion-server discovery behind the umb-core
//! collaborator traits. The wire protocol spoken over the listener is
//! deliberately not defined here; the bridge only has to be reachable
//! and restartable.

pub mod installer;
pub mod lifecycle;
pub mod listener;

pub use installer::ServerLocator;
pub use lifecycle::BridgeLifecycle;
pub use listener::BridgeListener;
