//! Unity MCP Bridge CLI
//!
//! Single binary exposing the bridge's one administrative action:
//! `unity-mcp-bridge setup` restarts the loopback listener and records
//! where the companion MCP server lives.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unity_mcp_bridge::output::print_error;
use unity_mcp_bridge::registry::{CommandContext, CommandRegistry, SETUP_COMMAND};

#[derive(Parser)]
#[command(name = "unity-mcp-bridge")]
#[command(version, about = "Unity MCP Bridge - local bridge listener and setup")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Restart the bridge listener and record the companion server path
    Setup {
        /// Run in foreground (don't daemonize)
        #[arg(short, long)]
        foreground: bool,
        /// Listener bind address (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
        /// Project root containing the data directory (defaults to the
        /// working directory)
        #[arg(short, long)]
        project: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let registry = CommandRegistry::builtin();

    let result = match cli.command {
        Commands::Setup {
            foreground,
            bind,
            project,
        } => {
            let ctx = CommandContext {
                config_path: cli.config,
                project_root: project,
                bind_override: bind,
                foreground,
            };
            registry.dispatch(SETUP_COMMAND, ctx).await
        }
    };

    if let Err(e) = result {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
