//! Daily fixture pipeline
//!
//! For one date: list the fixtures, gather each fixture's evidence
//! concurrently, enrich and score every fixture, and rank the lot by score.
//! Sub-fetch failures degrade to empty evidence; only failing to list the
//! day's fixtures fails the request.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use futures_util::stream::{self, StreamExt};
use thiserror::Error;
use tracing::{debug, info};

use crate::enrich::{enrich_match, FixtureEvidence};
use crate::filter::score_and_filter;
use crate::models::{FilterResult, FixtureId, HistoricalFixture, StatisticBlock, TeamId};
use crate::providers::{or_empty, FetchError, FixtureDataProvider};

/// Recent fixtures fetched per team when the caller does not say otherwise.
pub const DEFAULT_LAST_N: u32 = 10;

/// Fixtures evaluated at once. Each in-flight fixture issues up to three requests.
pub const DEFAULT_MAX_CONCURRENT_FIXTURES: usize = 8;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to list fixtures for {date}: {source}")]
    FixtureListing {
        date: String,
        #[source]
        source: FetchError,
    },
}

pub struct FilterPipeline {
    provider: Arc<dyn FixtureDataProvider>,
    max_concurrent: usize,
    processing_date: Option<NaiveDate>,
}

impl FilterPipeline {
    pub fn new(provider: Arc<dyn FixtureDataProvider>) -> Self {
        Self {
            provider,
            max_concurrent: DEFAULT_MAX_CONCURRENT_FIXTURES,
            processing_date: None,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Pin the date stamped on records (defaults to today, UTC).
    pub fn with_processing_date(mut self, date: NaiveDate) -> Self {
        self.processing_date = Some(date);
        self
    }

    /// Every fixture on `date`, enriched, scored and sorted by descending
    /// score. Failing fixtures are included; `pass` is advisory.
    pub async fn get_filtered_fixtures(
        &self,
        date: &str,
        last_n: u32,
    ) -> Result<Vec<FilterResult>, PipelineError> {
        let fixtures = self
            .provider
            .fixtures_by_date(date)
            .await
            .map_err(|source| PipelineError::FixtureListing {
                date: date.to_string(),
                source,
            })?;

        let processed_on = self
            .processing_date
            .unwrap_or_else(|| Utc::now().date_naive());

        info!(
            provider = self.provider.provider_name(),
            date,
            fixtures = fixtures.len(),
            last_n,
            "evaluating fixtures"
        );

        let mut results: Vec<FilterResult> = stream::iter(fixtures)
            .map(|fixture| self.evaluate_fixture(fixture, last_n, processed_on))
            .buffered(self.max_concurrent)
            .collect()
            .await;

        rank_by_score(&mut results);

        info!(
            date,
            total = results.len(),
            passing = results.iter().filter(|r| r.passes()).count(),
            top_score = results.first().map(FilterResult::score).unwrap_or(0.0),
            "fixtures ranked"
        );

        Ok(results)
    }

    async fn evaluate_fixture(
        &self,
        fixture: HistoricalFixture,
        last_n: u32,
        processed_on: NaiveDate,
    ) -> FilterResult {
        let (home_history, away_history, statistics) = tokio::join!(
            self.team_history(fixture.home.id, last_n),
            self.team_history(fixture.away.id, last_n),
            self.fixture_statistics(fixture.fixture_id),
        );

        let record = enrich_match(
            &fixture,
            FixtureEvidence {
                home_history: &home_history,
                away_history: &away_history,
                statistics: &statistics,
            },
            processed_on,
        );
        let result = score_and_filter(record);

        debug!(
            fixture = %result.record.id,
            score = result.filter.score,
            pass = result.filter.pass,
            "fixture scored"
        );

        result
    }

    async fn team_history(&self, team_id: Option<TeamId>, last_n: u32) -> Vec<HistoricalFixture> {
        let Some(team_id) = team_id else {
            return Vec::new();
        };
        or_empty(
            "last_fixtures_for_team",
            self.provider.last_fixtures_for_team(team_id, last_n).await,
        )
    }

    async fn fixture_statistics(&self, fixture_id: Option<FixtureId>) -> Vec<StatisticBlock> {
        let Some(fixture_id) = fixture_id else {
            return Vec::new();
        };
        or_empty(
            "statistics_for_fixture",
            self.provider.statistics_for_fixture(fixture_id).await,
        )
    }
}

/// Sort by descending score. The sort is stable: equal scores keep their
/// original fixture order.
pub fn rank_by_score(results: &mut [FilterResult]) {
    results.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
}
