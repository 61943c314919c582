//! Core types for the geocoding subsystem.

use serde::Serialize;
use std::fmt;

/// The best match for a place-name query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

/// One autocomplete candidate for a partial query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Geocoding errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// The query was empty or whitespace-only. Rejected before any network call.
    EmptyQuery,
    /// The geocoder answered with an empty result set.
    NotFound(String),
    /// The outbound request hit its deadline.
    Timeout,
    /// Transport-level failure talking to the geocoder.
    Network(String),
    /// The geocoder answered with something we could not parse.
    InvalidResponse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "no place name provided"),
            Self::NotFound(query) => write!(f, "no results for '{}'", query),
            Self::Timeout => write!(f, "geocoding request timed out"),
            Self::Network(msg) => write!(f, "geocoder request failed: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "invalid geocoder response: {}", msg),
        }
    }
}

impl std::error::Error for GeocodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(GeocodeError::EmptyQuery.to_string(), "no place name provided");
        assert_eq!(
            GeocodeError::NotFound("atlantis".into()).to_string(),
            "no results for 'atlantis'"
        );
        assert_eq!(
            GeocodeError::Timeout.to_string(),
            "geocoding request timed out"
        );
    }

    #[test]
    fn test_suggestion_serializes_with_four_fields() {
        let s = Suggestion {
            name: "Tokyo".into(),
            display_name: "Tokyo, Japan".into(),
            lat: 35.68,
            lon: 139.77,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["name"], "Tokyo");
        assert_eq!(json["display_name"], "Tokyo, Japan");
        assert_eq!(json["lat"], 35.68);
        assert_eq!(json["lon"], 139.77);
    }
}
