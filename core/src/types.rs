//! Alert feed DTOs.
//!
//! # Design
//! These mirror the GeoJSON `FeatureCollection` returned by the alerts
//! endpoint but keep only what the widget reads. Unknown members are ignored.
//! The mock-server crate defines its own copy of the schema; integration
//! tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// The decoded response body: a title and the active alerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertFeed {
    pub title: String,
    pub features: Vec<Feature>,
}

impl AlertFeed {
    /// Text of the summary heading, e.g. `"Current watches ... for Minnesota: 11"`.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.title, self.features.len())
    }

    pub fn headlines(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(Feature::headline)
    }
}

/// One alert record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub properties: AlertProperties,
}

impl Feature {
    /// The headline, or `""` when the service sent `null` or nothing.
    pub fn headline(&self) -> &str {
        self.properties.headline.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertProperties {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
