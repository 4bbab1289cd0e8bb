//! Blocking ureq transport run off the event loop.
//!
//! # Design
//! ureq is synchronous, so each request runs on tokio's blocking pool and
//! the fetch cycle awaits the join handle. The agent treats 4xx/5xx as data
//! so the core decides what a failing status means.

use std::time::Duration;

use alerts_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| TransportError::new(e.to_string()))?
    }
}

fn execute_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut response = match request.method {
        HttpMethod::Get => agent.get(&request.url).call(),
    }
    .map_err(|e| TransportError::new(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError::new(e.to_string()))?;
    Ok(HttpResponse::new(status, body))
}
