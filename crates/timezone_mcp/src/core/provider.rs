use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::Utc;
use chrono_tz::Tz;

use crate::core::{
    models::{LocationEntry, TimezoneLookup},
    utils::{self, OFFSET_FORMAT},
};

/// Known locations, keyed by their normalized name.
///
/// Keys must already be lowercase and trimmed.
const LOCATION_TABLE: &[(&str, Tz)] = &[
    ("new york", chrono_tz::America::New_York),
    ("los angeles", chrono_tz::America::Los_Angeles),
    ("chicago", chrono_tz::America::Chicago),
    ("denver", chrono_tz::America::Denver),
    ("phoenix", chrono_tz::America::Phoenix),
    ("london", chrono_tz::Europe::London),
    ("paris", chrono_tz::Europe::Paris),
    ("berlin", chrono_tz::Europe::Berlin),
    ("tokyo", chrono_tz::Asia::Tokyo),
    ("sydney", chrono_tz::Australia::Sydney),
    ("beijing", chrono_tz::Asia::Shanghai),
];

static LOCATIONS: LazyLock<HashMap<&'static str, Tz>> =
    LazyLock::new(|| LOCATION_TABLE.iter().copied().collect());

/// Resolves free-text locations against the fixed location table
#[derive(Debug, Clone, Copy, Default)]
pub struct TimezoneResolver;

impl TimezoneResolver {
    pub fn new() -> Self {
        Self
    }

    /// Look up the timezone for a location.
    ///
    /// Returns `None` when the normalized input is not in the table; absence is
    /// an ordinary outcome, not an error.
    pub fn resolve(&self, location: &str) -> Option<Tz> {
        let key = utils::normalize_location(location);
        LOCATIONS.get(key.as_str()).copied()
    }

    /// Resolve a location into the payload returned by `get_timezone`
    pub fn lookup(&self, location: &str) -> TimezoneLookup {
        match self.resolve(location) {
            Some(tz) => TimezoneLookup::found(location, tz),
            None => TimezoneLookup::not_found(location),
        }
    }

    /// Number of known locations
    pub fn location_count(&self) -> usize {
        LOCATIONS.len()
    }

    /// All known locations, sorted by name, with their current UTC offset
    pub fn locations(&self) -> Vec<LocationEntry> {
        let now = Utc::now();
        let mut entries: Vec<LocationEntry> = LOCATIONS
            .iter()
            .map(|(name, tz)| LocationEntry {
                location: name.to_string(),
                timezone: tz.name().to_string(),
                utc_offset: now.with_timezone(tz).format(OFFSET_FORMAT).to_string(),
            })
            .collect();
        entries.sort_by(|a, b| a.location.cmp(&b.location));
        entries
    }
}
