//! Runtime configuration for the alerts client.
//!
//! The base URL is a value passed into `AlertsClient` and `FetchController`
//! rather than a global, so tests and hosts can point the core at any server.

/// The public National Weather Service active-alerts endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov/alerts/active";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "ALERTS_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertsConfig {
    /// Everything before `?area=`. A trailing `/` is stripped by the client.
    pub base_url: String,
}

impl AlertsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Defaults, with `ALERTS_BASE_URL` applied when it is set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
