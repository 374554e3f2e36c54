//! API-Football fixture data provider
//!
//! Implements `FixtureDataProvider` on top of `ApiFootballClient`, decoding
//! the raw response items into normalized model records.

use async_trait::async_trait;

use super::{FetchError, FixtureDataProvider};
use crate::clients::api_football::ApiFootballClient;
use crate::config::ApiFootballConfig;
use crate::models::payload::{decode_fixture, decode_statistic_items};
use crate::models::{FixtureId, HistoricalFixture, StatisticBlock, TeamId};

#[derive(Debug, Clone)]
pub struct ApiFootballProvider {
    client: ApiFootballClient,
}

impl ApiFootballProvider {
    pub fn new(config: ApiFootballConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: ApiFootballClient::new(config)?,
        })
    }

    pub fn from_client(client: ApiFootballClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiFootballClient {
        &self.client
    }
}

#[async_trait]
impl FixtureDataProvider for ApiFootballProvider {
    async fn fixtures_by_date(&self, date: &str) -> Result<Vec<HistoricalFixture>, FetchError> {
        let items = self.client.get_fixtures_by_date(date).await?;
        Ok(items.into_iter().map(decode_fixture).collect())
    }

    async fn last_fixtures_for_team(
        &self,
        team_id: TeamId,
        count: u32,
    ) -> Result<Vec<HistoricalFixture>, FetchError> {
        let items = self.client.get_last_fixtures_for_team(team_id, count).await?;
        Ok(items.into_iter().map(decode_fixture).collect())
    }

    async fn statistics_for_fixture(
        &self,
        fixture_id: FixtureId,
    ) -> Result<Vec<StatisticBlock>, FetchError> {
        let items = self.client.get_fixture_statistics(fixture_id).await?;
        Ok(decode_statistic_items(&items))
    }

    fn provider_name(&self) -> &str {
        "API-Football"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provider_without_key_reports_missing_key() {
        let provider = ApiFootballProvider::new(ApiFootballConfig::default()).unwrap();
        assert_eq!(provider.provider_name(), "API-Football");

        let result = provider.statistics_for_fixture(1).await;
        assert!(matches!(result, Err(FetchError::MissingApiKey)));
    }
}
