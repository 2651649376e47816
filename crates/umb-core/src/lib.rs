//! umb-core: Core abstractions for the Unity MCP Bridge
//!
//! This crate provides the shared types, collaborator traits,
//! configuration structures, and the setup orchestration used by the
//! bridge daemon and the CLI.

pub mod config;
pub mod error;
pub mod marker;
pub mod pidfile;
pub mod setup;
pub mod traits;
pub mod types;

pub use error::BridgeError;
pub use setup::{MarkerOutcome, SetupOrchestrator, SetupReport};
pub use types::{ListenerState, ServerPath};
