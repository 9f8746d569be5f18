//! empdash CLI - employee data dashboard
//!
//! Runs `SELECT * FROM employees` against PostgreSQL and shows the rows:
//! - `show`: as text lines on stdout
//! - `serve`: as an HTML dashboard (plus a JSON mirror)
//! - `config`: inspect the resolved configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use empdash_core::DashConfig;

mod commands;
mod dotenv;
mod tracing_setup;

use commands::ConnectionArgs;

#[derive(Parser, Debug)]
#[command(
    name = "empdash",
    author,
    version,
    about = "Show the employees table as text or as a web dashboard"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.empdash/config.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print employee data to stdout
    Show,
    /// Run the web dashboard
    Serve(commands::serve::ServeArgs),
    /// Inspect configuration (show, path)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let loaded_env = dotenv::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    for path in &loaded_env {
        tracing::debug!("Loaded .env from {}", path.display());
    }

    let mut config = DashConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.connection.apply(&mut config);
    tracing::debug!(?config, "Resolved configuration");

    match cli.command {
        Commands::Show => commands::show::run_show(&config).await,
        Commands::Serve(args) => commands::serve::run_serve(args, config).await,
        Commands::Config(args) => commands::config::run_config(args, &config),
    }
}
