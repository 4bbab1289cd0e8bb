//! Validation of user-typed US state abbreviations.
//!
//! # Design
//! `StateCode` is a newtype whose only constructor validates, so holding one
//! means the value is exactly two ASCII uppercase letters. Case folding is
//! ASCII-only; `"ñy"` is rejected rather than folded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidStateCode;

/// Trimmed along with whitespace, as browsers do for typed input.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// A validated two-letter state code such as `CA` or `NY`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateCode(String);

impl StateCode {
    /// Trim and upper-case `raw`, then accept it only if exactly two letters
    /// remain.
    pub fn parse(raw: &str) -> Result<Self, InvalidStateCode> {
        let normalized = raw
            .trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
            .to_ascii_uppercase();
        if is_valid_state_abbr(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(InvalidStateCode::new(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// True when `normalized` is exactly two `A`-`Z` characters.
///
/// No trimming or case folding happens here; see [`StateCode::parse`].
pub fn is_valid_state_abbr(normalized: &str) -> bool {
    let bytes = normalized.as_bytes();
    bytes.len() == 2 && bytes.iter().all(u8::is_ascii_uppercase)
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StateCode {
    type Error = InvalidStateCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.0
    }
}
