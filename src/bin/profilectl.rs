//! Operator CLI for the profile aggregator.
//!
//! Runs the aggregation pipeline in-process without starting the server,
//! using the same environment configuration.
//!
//! # Usage
//!
//! ```bash
//! # Build one profile and print it
//! cargo run --bin profilectl -- fetch --pretty
//!
//! # Validate configuration
//! cargo run --bin profilectl -- config check
//! ```

use profile_aggregator::api::dto::ProfileResponse;
use profile_aggregator::{config, logging, server};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for the profile aggregator.
#[derive(Parser)]
#[command(name = "profilectl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Build one profile and print it as JSON
    Fetch {
        /// Pretty-print the document
        #[arg(long)]
        pretty: bool,
    },
    /// Configuration tools
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration, then print a masked summary
    Check,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_from_env().context("Configuration is invalid")?;
    logging::init("warn", &config.log_format);

    match cli.command {
        Commands::Fetch { pretty } => {
            let service = server::build_profile_service(&config)?;
            let profile = service
                .build_profile()
                .await
                .context("Failed to build profile")?;

            let body = ProfileResponse::from(profile);
            let json = if pretty {
                serde_json::to_string_pretty(&body)?
            } else {
                serde_json::to_string(&body)?
            };
            println!("{}", json);
        }
        Commands::Config {
            action: ConfigAction::Check,
        } => {
            println!("{}", "Configuration OK".green().bold());
            println!("  {} {}", "Listen:".bold(), config.listen_addr);
            println!("  {} {}", "Static dir:".bold(), config.static_dir);
            println!(
                "  {} {}s",
                "Provider timeout:".bold(),
                config.provider_timeout_seconds
            );
            println!("  {} {:?}", "Credentials:".bold(), config.credentials);
            println!("  {} {}", "randomuser:".bold(), config.endpoints.random_user);
            println!("  {} {}", "countrylayer:".bold(), config.endpoints.countrylayer);
            println!(
                "  {} {}",
                "restcountries:".bold(),
                config.endpoints.rest_countries
            );
            println!(
                "  {} {}",
                "exchangerate:".bold(),
                config.endpoints.exchange_rate
            );
            println!("  {} {}", "newsapi:".bold(), config.endpoints.news_api);
        }
    }

    Ok(())
}
