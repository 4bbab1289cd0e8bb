//! One click, one fetch cycle.
//!
//! # Design
//! `FetchController::handle_fetch` validates the input, shows the loading
//! indicator, awaits the transport once, and renders the resulting
//! `ViewState`. Errors never escape: each one becomes the text of the error
//! region and a `FetchOutcome::Failed` for the caller.
//!
//! An in-flight flag rejects a second invocation while the first is still
//! awaiting its response. The loading indicator is hidden by a drop guard as
//! well as by the terminal state, so dropping the future mid-request does not
//! leave it visible.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::client::AlertsClient;
use crate::config::AlertsConfig;
use crate::error::FetchError;
use crate::http::Transport;
use crate::presenter::{Surface, ViewState};
use crate::state_code::StateCode;
use crate::types::AlertFeed;

/// What a call to [`FetchController::handle_fetch`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The feed was rendered into the results region.
    Rendered { alerts: usize },
    /// The error region now shows this error.
    Failed(FetchError),
    /// Another cycle was in flight; nothing was read, sent, or written.
    Busy,
    /// The surface has no input field to read from.
    NoInput,
}

pub struct FetchController<T> {
    client: AlertsClient,
    transport: T,
    in_flight: AtomicBool,
}

impl<T: Transport> FetchController<T> {
    pub fn new(config: &AlertsConfig, transport: T) -> Self {
        let client = AlertsClient::new(config);
        tracing::debug!(base_url = client.base_url(), "fetch controller configured");
        Self {
            client,
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn handle_fetch(&self, surface: &Surface<'_>) -> FetchOutcome {
        let Some(_flight) = InFlight::acquire(&self.in_flight) else {
            tracing::warn!("fetch already in flight, ignoring request");
            return FetchOutcome::Busy;
        };
        let Some(input) = surface.input else {
            return FetchOutcome::NoInput;
        };

        let raw = input.value();
        let state = match StateCode::parse(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::debug!(input = %e.input(), "rejected state code");
                let err = FetchError::from(e);
                surface.apply(&ViewState::Invalid(err.to_string()));
                return FetchOutcome::Failed(err);
            }
        };

        surface.apply(&ViewState::Loading);
        let loading = LoadingGuard::new(surface);

        let (view, outcome) = match self.fetch(&state).await {
            Ok(feed) => {
                tracing::info!(state = %state, alerts = feed.features.len(), "rendering alerts");
                let alerts = feed.features.len();
                (ViewState::Loaded(feed), FetchOutcome::Rendered { alerts })
            }
            Err(err) => {
                tracing::warn!(state = %state, error = %err, "alerts fetch failed");
                (ViewState::Failed(err.to_string()), FetchOutcome::Failed(err))
            }
        };

        surface.apply(&view);
        loading.disarm();
        outcome
    }

    async fn fetch(&self, state: &StateCode) -> Result<AlertFeed, FetchError> {
        let request = self.client.build_active_alerts(state);
        tracing::debug!(url = %request.url, "requesting active alerts");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "alerts response received");
        self.client.parse_active_alerts(state, response)
    }
}

/// Holds the in-flight flag for the lifetime of one cycle.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Hides the loading indicator on drop unless a terminal state already did.
struct LoadingGuard<'s, 'a> {
    surface: &'s Surface<'a>,
    armed: bool,
}

impl<'s, 'a> LoadingGuard<'s, 'a> {
    fn new(surface: &'s Surface<'a>) -> Self {
        Self {
            surface,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_, '_> {
    fn drop(&mut self) {
        if self.armed {
            self.surface.hide_loading();
        }
    }
}
