//! sitewatch CLI - watch web pages and announce changes to Discord.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sitewatch::config::WatchConfig;
use sitewatch::fetch::HttpFetcher;
use sitewatch::notify::TermSink;
use sitewatch::poller::Poller;

/// Watch web pages for content changes and announce them to Discord.
#[derive(Parser)]
#[command(name = "sitewatch")]
#[command(about = "Poll web pages and announce changes to a Discord channel")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Connect to Discord and poll until stopped
    Run {
        /// Path to the TOML config file
        #[arg(long, default_value = "sitewatch.toml")]
        config: PathBuf,

        /// Discord bot token
        #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Run a single poll cycle and print the current fragments
    Check {
        /// Path to the TOML config file
        #[arg(long, default_value = "sitewatch.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("sitewatch=debug,info")
    } else {
        EnvFilter::new("sitewatch=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Run { config, token } => {
            let config = WatchConfig::load(&config)?;
            tracing::info!(
                sites = config.sites.len(),
                interval_ms = config.interval_ms,
                "Configuration loaded"
            );
            sitewatch::bot::run(config, &token).await
        }

        Commands::Check { config } => {
            let config = WatchConfig::load(&config)?;
            println!("Checking {} site(s), current fragments:", config.sites.len());

            let mut poller = Poller::new(
                config.sites,
                Arc::new(HttpFetcher::new()),
                Arc::new(TermSink),
            );
            let summary = poller.run_tick().await;

            if summary.failed > 0 {
                println!(
                    "{} {} site(s) could not be fetched",
                    "warning:".yellow().bold(),
                    summary.failed
                );
            }
            Ok(())
        }
    }
}
