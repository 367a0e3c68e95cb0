//! `medgate` -- CLI binary for the medgate prediction service.
//!
//! Provides the following subcommands:
//!
//! - `medgate serve` -- Run the HTTP prediction service.
//! - `medgate config` -- Show resolved configuration.

use std::path::Path;

use clap::{Parser, Subcommand};

use medgate_types::config::Config;

mod commands;

/// medgate prediction service CLI.
#[derive(Parser)]
#[command(name = "medgate", about = "medgate prediction service CLI", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP prediction service.
    Serve(commands::serve::ServeArgs),

    /// Show resolved configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

/// Subcommands for `medgate config`.
#[derive(Subcommand)]
enum ConfigCmd {
    /// Show the full resolved configuration.
    Show {
        /// Config file path (overrides auto-discovery).
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Show a specific configuration section.
    Section {
        /// Section name (e.g., "server", "model").
        name: String,

        /// Config file path (overrides auto-discovery).
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await?,
        Commands::Config { action } => match action {
            ConfigCmd::Show { config } => {
                let cfg = Config::load(config.as_deref().map(Path::new))?;
                commands::config_cmd::config_show(&cfg);
            }
            ConfigCmd::Section { name, config } => {
                let cfg = Config::load(config.as_deref().map(Path::new))?;
                commands::config_cmd::config_section(&cfg, &name);
            }
        },
    }

    Ok(())
}
