use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use halftime_core::config::{DEFAULT_API_HOST, DEFAULT_REQUEST_TIMEOUT};
use halftime_core::pipeline::{DEFAULT_LAST_N, DEFAULT_MAX_CONCURRENT_FIXTURES};
use halftime_core::ApiFootballConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_host: String,
    pub request_timeout: Duration,

    pub last_n: u32,
    pub max_concurrent_fixtures: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("API_FOOTBALL_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let api_host =
            env::var("API_FOOTBALL_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());

        let request_timeout = Duration::from_secs(
            parse_env("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT.as_secs())
                .context("REQUEST_TIMEOUT_SECS")?,
        );

        let last_n = parse_env("LAST_N", DEFAULT_LAST_N).context("LAST_N")?;
        let max_concurrent_fixtures =
            parse_env("MAX_CONCURRENT_FIXTURES", DEFAULT_MAX_CONCURRENT_FIXTURES)
                .context("MAX_CONCURRENT_FIXTURES")?;

        Ok(Self {
            api_key,
            api_host,
            request_timeout,
            last_n,
            max_concurrent_fixtures,
        })
    }

    pub fn api_football(&self) -> ApiFootballConfig {
        ApiFootballConfig {
            api_key: self.api_key.clone(),
            ..ApiFootballConfig::default()
        }
        .with_host(self.api_host.clone())
        .with_request_timeout(self.request_timeout)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Invalid {key}: {raw} (expected integer)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_football_config_carries_overrides() {
        let config = Config {
            api_key: Some("k".to_string()),
            api_host: "http://localhost:9000/".to_string(),
            request_timeout: Duration::from_secs(3),
            last_n: 5,
            max_concurrent_fixtures: 2,
        };

        let api = config.api_football();
        assert!(api.has_api_key());
        assert_eq!(api.base_url(), "http://localhost:9000");
        assert_eq!(api.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u32 = parse_env("HT_FILTER_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
