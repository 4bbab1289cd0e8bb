//! The UI surface and the view states rendered onto it.
//!
//! # Design
//! `ViewState` names every state the widget can be in; `Surface::apply`
//! renders one of them in full. `Idle`, `Loaded` and `Failed` end a cycle and
//! hide the loading indicator, so a finished cycle cannot leave it visible.
//! `Invalid` is reached before loading starts and leaves the indicator alone.
//! Any region the host did not provide is skipped.

use crate::render::{render_alerts, InputField, Marker, RenderTarget};
use crate::types::AlertFeed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(AlertFeed),
    Failed(String),
    /// The input was rejected before any request.
    Invalid(String),
}

/// Handles to the host's UI regions.
#[derive(Clone, Copy, Default)]
pub struct Surface<'a> {
    pub input: Option<&'a dyn InputField>,
    pub results: Option<&'a dyn RenderTarget>,
    pub error: Option<&'a dyn RenderTarget>,
    pub loading: Option<&'a dyn RenderTarget>,
}

impl Surface<'_> {
    pub fn apply(&self, state: &ViewState) {
        match state {
            ViewState::Idle => self.hide_loading(),
            ViewState::Loading => self.show_loading(),
            ViewState::Loaded(feed) => {
                if let Some(results) = self.results {
                    render_alerts(feed, results);
                }
                self.clear_error();
                if let Some(input) = self.input {
                    input.set_value("");
                }
                self.hide_loading();
            }
            ViewState::Failed(message) => {
                self.show_error(message);
                self.hide_loading();
            }
            ViewState::Invalid(message) => self.show_error(message),
        }
    }

    pub fn show_error(&self, message: &str) {
        if let Some(error) = self.error {
            error.set_text(message);
            error.set_marker(Marker::Hidden, false);
            error.set_marker(Marker::Error, true);
        }
    }

    pub fn clear_error(&self) {
        if let Some(error) = self.error {
            error.set_text("");
            error.set_marker(Marker::Hidden, true);
            error.set_marker(Marker::Error, false);
        }
    }

    pub fn show_loading(&self) {
        if let Some(loading) = self.loading {
            loading.set_marker(Marker::Hidden, false);
        }
    }

    pub fn hide_loading(&self) {
        if let Some(loading) = self.loading {
            loading.set_marker(Marker::Hidden, true);
        }
    }
}
