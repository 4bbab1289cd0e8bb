//! Core of the weather alerts widget.
//!
//! # Overview
//! Turns a typed US state abbreviation into a rendered list of active alert
//! headlines, or an error message, without owning any network or UI code.
//! The host supplies a `Transport` that performs HTTP round-trips and a
//! `Surface` of `RenderTarget` regions to draw into.
//!
//! # Design
//! - `StateCode` validates input before anything else happens.
//! - `AlertsClient` is stateless: `build_active_alerts` produces an
//!   `HttpRequest`, `parse_active_alerts` consumes an `HttpResponse`.
//! - `FetchController` drives one cycle and renders an explicit `ViewState`
//!   through the `Surface`.
//! - The base URL comes from `AlertsConfig`, never from a global.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod presenter;
pub mod render;
pub mod state_code;
pub mod types;

pub use client::AlertsClient;
pub use config::AlertsConfig;
pub use controller::{FetchController, FetchOutcome};
pub use error::{FetchError, InvalidStateCode, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use presenter::{Surface, ViewState};
pub use render::{render_alerts, InputField, Marker, Node, RenderTarget, Tag};
pub use state_code::{is_valid_state_abbr, StateCode};
pub use types::{AlertFeed, AlertProperties, Feature};
