//! Provider configuration
//!
//! Built by the caller and handed to `ApiFootballClient`; nothing in this
//! crate reads environment variables.

use std::fmt;
use std::time::Duration;

/// Default API-Football host
pub const DEFAULT_API_HOST: &str = "v3.football.api-sports.io";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct ApiFootballConfig {
    /// `x-apisports-key` credential. `None` means every fetch fails fast.
    pub api_key: Option<String>,
    pub host: String,
    pub request_timeout: Duration,
}

impl ApiFootballConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// `https://{host}`, or the host verbatim when it already carries a scheme.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}

impl Default for ApiFootballConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: DEFAULT_API_HOST.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

// The key never reaches logs.
impl fmt::Debug for ApiFootballConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiFootballConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
