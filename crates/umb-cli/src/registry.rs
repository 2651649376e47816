//! Command registration table
//!
//! Maps stable command identifiers to their entry points. The clap
//! surface in `main` is just one consumer of this table; an embedding
//! host can dispatch the same ids without going through argument
//! parsing.

use std::path::PathBuf;

use futures::future::BoxFuture;
use thiserror::Error;

/// Stable identifier of the setup command
pub const SETUP_COMMAND: &str = "bridge.setup";

/// Context handed to command entry points
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Explicit config file path
    pub config_path: Option<PathBuf>,
    /// Project root containing the data directory; defaults to the
    /// working directory
    pub project_root: Option<PathBuf>,
    /// Listener bind address override
    pub bind_override: Option<String>,
    /// Stay in the foreground instead of re-spawning detached
    pub foreground: bool,
}

/// A command entry point
pub type CommandHandler = fn(CommandContext) -> BoxFuture<'static, anyhow::Result<()>>;

/// One registered command
pub struct CommandSpec {
    /// Stable identifier, `<area>.<action>`
    pub id: &'static str,
    /// One-line description for hosts that list commands
    pub summary: &'static str,
    /// Entry point invoked on dispatch
    pub handler: CommandHandler,
}

/// Registry lookup errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No command registered under the requested id
    #[error("Unknown command id: {0}")]
    UnknownCommand(String),
}

/// Registration table mapping command ids to entry points
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Registry with the built-in commands registered
    pub fn builtin() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register(CommandSpec {
            id: SETUP_COMMAND,
            summary: "Restart the bridge listener and record the companion server path",
            handler: |ctx| Box::pin(crate::commands::setup(ctx)),
        });
        registry
    }

    /// Register a command; re-registering an id replaces the entry
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.retain(|c| c.id != spec.id);
        self.commands.push(spec);
    }

    /// All registered commands, in registration order
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Dispatch the command registered under `id`
    pub async fn dispatch(&self, id: &str, ctx: CommandContext) -> anyhow::Result<()> {
        let spec = self
            .commands
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| RegistryError::UnknownCommand(id.to_string()))?;
        (spec.handler)(ctx).await
    }
}
