//! Fixture data provider abstraction
//!
//! The pipeline reads everything it knows about a day's football through
//! `FixtureDataProvider`: the day's fixtures, each team's recent fixtures
//! and per-fixture statistics. Implementations report failures as
//! `FetchError`; the pipeline decides what a failure means through
//! `or_empty`.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::models::{FixtureId, HistoricalFixture, StatisticBlock, TeamId};

pub mod api_football;

pub use api_football::ApiFootballProvider;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API key not configured")]
    MissingApiKey,

    #[error("invalid provider JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait FixtureDataProvider: Send + Sync {
    /// Fixtures scheduled or played on `date` (`YYYY-MM-DD`).
    async fn fixtures_by_date(&self, date: &str) -> Result<Vec<HistoricalFixture>, FetchError>;

    /// The team's `count` most recent completed fixtures, in any stable order.
    async fn last_fixtures_for_team(
        &self,
        team_id: TeamId,
        count: u32,
    ) -> Result<Vec<HistoricalFixture>, FetchError>;

    /// Per-team statistic blocks for one fixture; may legitimately be empty.
    async fn statistics_for_fixture(
        &self,
        fixture_id: FixtureId,
    ) -> Result<Vec<StatisticBlock>, FetchError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}

/// Collapse a failed sub-fetch into its empty value.
///
/// This is the one place where "fetch failed" becomes "no data". The error
/// is logged and otherwise dropped.
pub fn or_empty<T: Default>(operation: &str, result: Result<T, FetchError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(operation, error = %err, "provider fetch failed, continuing without data");
            T::default()
        }
    }
}
