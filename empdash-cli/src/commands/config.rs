use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use empdash_core::DashConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved configuration (password redacted)
    Show,
    /// Show default config file path
    Path,
}

pub fn run_config(args: ConfigArgs, config: &DashConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            println!("{config}");
            Ok(())
        }
        ConfigCommands::Path => {
            let path = DashConfig::default_path().context("Could not determine home directory")?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
