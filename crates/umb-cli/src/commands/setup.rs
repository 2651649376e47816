//! The setup command
//!
//! Restarts the bridge listener, resolves the companion server install,
//! publishes the marker file, and refreshes the host index. Detaches by
//! default; `--foreground` keeps the bridge in this process until a
//! shutdown signal arrives.

use std::path::Path;

use anyhow::{Context, Result};

use umb_bridge::{BridgeLifecycle, ServerLocator};
use umb_core::config::{self, BridgeConfig, ConfigFile};
use umb_core::marker;
use umb_core::setup::{MarkerOutcome, SetupOrchestrator};

use crate::host::LocalIndex;
use crate::output::{print_info, print_success, print_warning};
use crate::registry::CommandContext;

/// Entry point for `bridge.setup`
pub async fn setup(ctx: CommandContext) -> Result<()> {
    if !ctx.foreground {
        return respawn_detached(&ctx);
    }
    run_foreground(ctx).await
}

/// Daemonize by re-spawning ourselves in foreground mode
fn respawn_detached(ctx: &CommandContext) -> Result<()> {
    let exe = std::env::current_exe().context("Failed to locate own executable")?;
    let mut cmd = std::process::Command::new(exe);
    cmd.arg("setup").arg("--foreground");
    if let Some(bind) = &ctx.bind_override {
        cmd.arg("--bind").arg(bind);
    }
    if let Some(project) = &ctx.project_root {
        cmd.arg("--project").arg(project);
    }
    if let Some(path) = &ctx.config_path {
        cmd.arg("--config").arg(path);
    }

    let child = cmd
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .context("Failed to launch background bridge")?;

    print_success(&format!("Bridge setup running in background (PID: {})", child.id()));
    Ok(())
}

async fn run_foreground(ctx: CommandContext) -> Result<()> {
    tracing::info!("Unity MCP Bridge setup starting...");

    let config = load_effective_config(ctx.config_path.as_deref())?;
    let bind_addr = ctx
        .bind_override
        .clone()
        .unwrap_or_else(|| config.bind_address.clone());
    let project_root = match ctx.project_root.clone() {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };
    let data_root = config.data_root(&project_root);

    let lifecycle = BridgeLifecycle::new(bind_addr, config.pid_file.clone());
    let locator = ServerLocator::new(config.server_src.clone())?;
    let index = LocalIndex::new(marker::marker_dir(&data_root));

    let orchestrator = SetupOrchestrator::new(&lifecycle, &locator, &index, &data_root);
    let report = orchestrator.run().await.context("Setup failed")?;

    match &report.marker {
        MarkerOutcome::Written(path) => {
            print_success(&format!(
                "Server path {} recorded at {}",
                report.server_path,
                path.display()
            ));
        }
        MarkerOutcome::Failed(e) => {
            // The bridge itself is fine; only the record on disk is stale
            print_warning(&format!("Bridge is up, but the server path was not recorded: {}", e));
        }
    }

    if let Some(addr) = lifecycle.local_addr().await {
        print_success(&format!("Bridge listening on {}", addr));
    }
    print_info("Press Ctrl+C to stop the bridge");

    wait_for_shutdown().await;
    lifecycle.shutdown().await;
    Ok(())
}

/// Load configuration, wrapped in [`ConfigFile`] to handle the `[bridge]` section
fn load_effective_config(config_path: Option<&Path>) -> Result<BridgeConfig> {
    if let Some(path) = config_path {
        let file: ConfigFile = config::load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        return Ok(file.bridge);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        let file: ConfigFile = config::load_config(&default_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config from {}: {}", default_path.display(), e);
            ConfigFile::default()
        });
        Ok(file.bridge)
    } else {
        tracing::debug!("Using default configuration");
        Ok(BridgeConfig::default())
    }
}

/// Park until Ctrl+C or SIGTERM
async fn wait_for_shutdown() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
