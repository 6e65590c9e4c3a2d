use chrono_tz::Tz;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::core::utils::LOCATION_NOT_RECOGNIZED;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddRequest {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetTimezoneRequest {
    #[schemars(
        description = "The city or location to look up the timezone for, such as 'New York', 'London', etc."
    )]
    pub location: String,
}

/// Structured outcome of a timezone lookup
///
/// Serializes to `{location, timezone}` when resolved and to
/// `{location, timezone: null, error}` when not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TimezoneLookup {
    /// Location exactly as the caller supplied it
    pub location: String,
    /// IANA timezone identifier, or null when the location is unknown
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TimezoneLookup {
    pub fn found(location: &str, tz: Tz) -> Self {
        Self {
            location: location.to_string(),
            timezone: Some(tz.name().to_string()),
            error: None,
        }
    }

    pub fn not_found(location: &str) -> Self {
        Self {
            location: location.to_string(),
            timezone: None,
            error: Some(LOCATION_NOT_RECOGNIZED.to_string()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.timezone.is_some()
    }

    /// Human-readable sentence for the text content part
    pub fn message(&self) -> String {
        match &self.timezone {
            Some(tz) => format!("The timezone for {} is {}.", self.location, tz),
            None => format!(
                "Sorry, I could not determine the timezone for '{}'. Please enter a major city (for best results), or rephrase.",
                self.location
            ),
        }
    }
}

/// One row of the `timezone://locations` resource
#[derive(Debug, Clone, Serialize)]
pub struct LocationEntry {
    pub location: String,
    pub timezone: String,
    /// Current offset from UTC, e.g. `+09:00`
    pub utc_offset: String,
}
