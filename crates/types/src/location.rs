//! Input location tracking
//!
//! Every model record can remember where each of its fields came from
//! (line and column inside some input description). This information is
//! diagnostic only: it is never serialized with the record and never
//! influences how the record is consumed.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::fmt;

/// Location metadata keyed by the field it describes
pub type Locations = HashMap<LocationKey, InputLocation>;

/// Open-ended key naming which field a location describes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(Cow<'static, str>);

impl LocationKey {
    /// The record itself rather than one of its fields
    pub const SELF: Self = Self::from_static("");
    pub const DOWNLOAD_URL: Self = Self::from_static("downloadUrl");
    pub const RELOCATION: Self = Self::from_static("relocation");
    pub const SITE: Self = Self::from_static("site");
    pub const REPOSITORY: Self = Self::from_static("repository");
    pub const SNAPSHOT_REPOSITORY: Self = Self::from_static("snapshotRepository");
    pub const STATUS: Self = Self::from_static("status");

    /// Create a key from a static string without allocating
    #[must_use]
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocationKey {
    fn from(key: &str) -> Self {
        Self(Cow::Owned(key.to_owned()))
    }
}

impl From<String> for LocationKey {
    fn from(key: String) -> Self {
        Self(Cow::Owned(key))
    }
}

/// Identifies the input description a location points into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSource {
    /// Identifier of the model the input belongs to (e.g. `groupId:artifactId:version`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Path or URL of the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.model_id, &self.location) {
            (Some(id), Some(location)) => write!(f, "{id} ({location})"),
            (Some(id), None) => f.write_str(id),
            (None, Some(location)) => f.write_str(location),
            (None, None) => f.write_str("<unknown>"),
        }
    }
}

/// Position of a value inside an input description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLocation {
    /// 1-based line, 0 when unknown
    pub line_number: u32,
    /// 1-based column, 0 when unknown
    pub column_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<InputSource>,
    /// Locations of values nested below this one
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub locations: Locations,
}

impl InputLocation {
    #[must_use]
    pub fn new(line_number: u32, column_number: u32) -> Self {
        Self {
            line_number,
            column_number,
            ..Self::default()
        }
    }
}

impl fmt::Display for InputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{source}, ")?;
        }
        write!(f, "line {}, column {}", self.line_number, self.column_number)
    }
}

/// Access to the per-field location map carried by model records
pub trait InputLocationTracker {
    fn locations(&self) -> &Locations;

    fn locations_mut(&mut self) -> &mut Locations;

    /// Location recorded for `key`, if any
    fn location(&self, key: &str) -> Option<&InputLocation> {
        self.locations().get(key)
    }

    /// Record `location` for `key`, replacing any previous entry
    fn set_location(&mut self, key: impl Into<LocationKey>, location: InputLocation) {
        self.locations_mut().insert(key.into(), location);
    }
}

impl InputLocationTracker for InputLocation {
    fn locations(&self) -> &Locations {
        &self.locations
    }

    fn locations_mut(&mut self) -> &mut Locations {
        &mut self.locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_and_owned_keys_are_equal() {
        let owned = LocationKey::from(String::from("site"));
        assert_eq!(owned, LocationKey::SITE);

        let mut locations = Locations::new();
        locations.insert(owned, InputLocation::new(3, 1));
        assert_eq!(locations.get("site"), Some(&InputLocation::new(3, 1)));
        assert!(locations.contains_key(&LocationKey::SITE));
    }

    #[test]
    fn test_location_display() {
        let mut location = InputLocation::new(12, 5);
        assert_eq!(location.to_string(), "line 12, column 5");

        location.source = Some(InputSource {
            model_id: None,
            location: Some("distribution.toml".to_string()),
        });
        assert_eq!(location.to_string(), "distribution.toml, line 12, column 5");
    }

    #[test]
    fn test_nested_locations_overwrite() {
        let mut location = InputLocation::new(1, 1);
        location.set_location("url", InputLocation::new(2, 3));
        location.set_location("url", InputLocation::new(4, 7));
        assert_eq!(location.locations().len(), 1);
        assert_eq!(location.location("url"), Some(&InputLocation::new(4, 7)));
    }
}
