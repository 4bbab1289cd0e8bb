//! Error types for the alerts fetch cycle.
//!
//! # Design
//! The `Display` text of every `FetchError` is the message shown to the user,
//! so the controller can route any failure to the error region with
//! `to_string()`. Transport failures carry the host's message verbatim.

use thiserror::Error;

use crate::state_code::StateCode;

/// The fixed message shown for input that is not a two-letter code.
pub const VALIDATION_MESSAGE: &str = "Please enter a valid 2-letter state abbreviation (e.g., NY).";

/// Raw input that did not normalize to a two-letter state code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter a valid 2-letter state abbreviation (e.g., NY).")]
pub struct InvalidStateCode {
    input: String,
}

impl InvalidStateCode {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The input exactly as it was typed.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A request that could not complete, as reported by the host's HTTP stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Every way a fetch cycle can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The input was rejected before any request was built.
    #[error(transparent)]
    Validation(#[from] InvalidStateCode),

    /// The server answered with a non-2xx status.
    #[error(
        "Failed to fetch weather alerts for {state}. Please check the state abbreviation and try again."
    )]
    Response { state: StateCode, status: u16 },

    /// The request could not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A 2xx body that is not an alert feed.
    #[error("Failed to read weather alerts: {0}")]
    Decode(String),
}
