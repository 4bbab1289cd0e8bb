//! Stateless HTTP request builder and response parser for the alerts API.
//!
//! # Design
//! `AlertsClient` holds only the configured base URL. Fetching is split into
//! `build_active_alerts`, which produces an `HttpRequest`, and
//! `parse_active_alerts`, which consumes the `HttpResponse`. Whoever sits in
//! between (the `FetchController`'s transport, or a host doing its own I/O)
//! performs the round-trip.

use crate::config::AlertsConfig;
use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::state_code::StateCode;
use crate::types::AlertFeed;

#[derive(Debug, Clone)]
pub struct AlertsClient {
    base_url: String,
}

impl AlertsClient {
    pub fn new(config: &AlertsConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET <base-url>?area=<code>` with no headers and no body.
    pub fn build_active_alerts(&self, state: &StateCode) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}?area={state}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Any non-2xx status fails, whatever the body says.
    pub fn parse_active_alerts(
        &self,
        state: &StateCode,
        response: HttpResponse,
    ) -> Result<AlertFeed, FetchError> {
        if !response.is_success() {
            return Err(FetchError::Response {
                state: state.clone(),
                status: response.status,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
