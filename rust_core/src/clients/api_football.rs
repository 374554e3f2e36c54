use crate::config::ApiFootballConfig;
use crate::models::payload::response_items;
use crate::models::{FixtureId, TeamId};
use crate::providers::FetchError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

const API_KEY_HEADER: &str = "x-apisports-key";

/// Fixed historical date used to check the key; any date with fixtures works.
const KEY_CHECK_DATE: &str = "2024-12-03";

const BODY_SNIPPET_CHARS: usize = 200;

#[derive(Clone)]
pub struct ApiFootballClient {
    client: Client,
    config: ApiFootballConfig,
}

impl std::fmt::Debug for ApiFootballClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiFootballClient")
            .field("base_url", &self.config.base_url())
            .field("request_timeout", &self.config.request_timeout)
            .finish()
    }
}

/// Outcome of `check_key`. Never contains the key itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyCheck {
    pub api_key_present: bool,
    pub api_host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_body_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_error: Option<String>,
}

impl ApiFootballClient {
    /// Create a client with the configured per-request timeout
    pub fn new(config: ApiFootballConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    /// Get the configuration this client was built with
    pub fn config(&self) -> &ApiFootballConfig {
        &self.config
    }

    /// `GET /fixtures?date=YYYY-MM-DD`
    pub async fn get_fixtures_by_date(&self, date: &str) -> Result<Vec<Value>, FetchError> {
        self.get_items("/fixtures", &[("date", date.to_string())])
            .await
    }

    /// `GET /fixtures?team={id}&last={n}`
    pub async fn get_last_fixtures_for_team(
        &self,
        team_id: TeamId,
        last: u32,
    ) -> Result<Vec<Value>, FetchError> {
        self.get_items(
            "/fixtures",
            &[("team", team_id.to_string()), ("last", last.to_string())],
        )
        .await
    }

    /// `GET /fixtures/statistics?fixture={id}`
    pub async fn get_fixture_statistics(
        &self,
        fixture_id: FixtureId,
    ) -> Result<Vec<Value>, FetchError> {
        self.get_items("/fixtures/statistics", &[("fixture", fixture_id.to_string())])
            .await
    }

    /// Report whether a key is configured and, if so, how the provider
    /// answers a single test request.
    pub async fn check_key(&self) -> KeyCheck {
        let mut check = KeyCheck {
            api_key_present: self.config.has_api_key(),
            api_host: self.config.host.clone(),
            note: None,
            external_status: None,
            external_body_snippet: None,
            external_error: None,
        };

        let Some(api_key) = self.api_key() else {
            check.note = Some("API key is not configured for this runtime.".to_string());
            return check;
        };

        let url = format!("{}/fixtures", self.config.base_url());
        let result = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(&[("date", KEY_CHECK_DATE)])
            .send()
            .await;

        match result {
            Ok(resp) => {
                check.external_status = Some(resp.status().as_u16());
                match resp.text().await {
                    Ok(body) => {
                        check.external_body_snippet =
                            Some(body.chars().take(BODY_SNIPPET_CHARS).collect());
                    }
                    Err(e) => check.external_error = Some(e.to_string()),
                }
            }
            Err(e) => check.external_error = Some(e.to_string()),
        }

        check
    }

    async fn get_items(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<Value>, FetchError> {
        let body = self.get_json(path, params).await?;
        Ok(response_items(&body))
    }

    /// One request, no state kept between calls.
    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let api_key = self.api_key().ok_or(FetchError::MissingApiKey)?;
        let url = format!("{}{}", self.config.base_url(), path);
        debug!(%url, ?params, "provider request");

        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
