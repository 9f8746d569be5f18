//! HTTP server command for the employee dashboard

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use empdash_core::DashConfig;
use empdash_server::{run_server, PgEmployeeSource, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: config file, EMPDASH_BIND, or 127.0.0.1:8501)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the dashboard server until Ctrl+C / SIGTERM.
pub async fn run_serve(args: ServeArgs, config: DashConfig) -> Result<()> {
    let server_config = ServerConfig {
        bind_addr: args.bind.unwrap_or(config.bind),
        cors_permissive: args.cors_permissive,
    };

    tracing::info!(
        host = %config.database.host,
        dbname = %config.database.dbname,
        "Starting employee dashboard on {}",
        server_config.bind_addr
    );

    let source = PgEmployeeSource::new(config.database);
    run_server(Arc::new(source), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
