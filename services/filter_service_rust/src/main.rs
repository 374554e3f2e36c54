mod cli;
mod config;

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use dotenv::dotenv;
use halftime_core::clients::ApiFootballClient;
use halftime_core::{ApiFootballProvider, FilterPipeline, FilterResult};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Logs go to stderr; stdout is reserved for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Run {
            date,
            last,
            passing_only,
            pretty,
        } => {
            if config.api_key.is_none() {
                bail!("API_FOOTBALL_KEY is not set; run `ht_filter check-key` for details");
            }

            let date = date.format("%Y-%m-%d").to_string();
            let last_n = last.unwrap_or(config.last_n);
            info!(%date, last_n, host = %config.api_host, "Starting half-time filter run");

            let provider = ApiFootballProvider::new(config.api_football())?;
            let pipeline = FilterPipeline::new(Arc::new(provider))
                .with_max_concurrent(config.max_concurrent_fixtures);

            let mut results = pipeline.get_filtered_fixtures(&date, last_n).await?;
            if passing_only {
                results.retain(FilterResult::passes);
            }

            print_json(&results, pretty)?;
        }
        Commands::CheckKey => {
            let client = ApiFootballClient::new(config.api_football())?;
            let check = client.check_key().await;
            print_json(&check, true)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
