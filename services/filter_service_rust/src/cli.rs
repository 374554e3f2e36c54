//! CLI commands for ht_filter.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ht_filter")]
#[command(version, about = "Rank a day's football fixtures by first-half goal likelihood", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every fixture on a date and print them ranked, as JSON
    Run {
        /// Fixture date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// Recent fixtures per team (overrides LAST_N)
        #[arg(short, long)]
        last: Option<u32>,

        /// Print only fixtures that pass the filter
        #[arg(long)]
        passing_only: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Report whether the API key is configured and accepted
    CheckKey,
}
