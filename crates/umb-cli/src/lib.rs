//! umb-cli: Command-line interface for the Unity MCP Bridge
//!
//! Provides the `unity-mcp-bridge` binary: the setup command plus the
//! plumbing a standalone (non-editor) host needs to run it.

pub mod commands;
pub mod host;
pub mod output;
pub mod registry;
