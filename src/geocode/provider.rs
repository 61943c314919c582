//! Nominatim provider.
//!
//! One outbound query per lookup, bounded by a fixed timeout. Nominatim
//! returns lat/lon as strings; they are parsed here so the rest of the
//! crate only sees numeric coordinates.

use super::types::{GeocodeError, Place, Suggestion};
use serde::Deserialize;
use std::time::Duration;

const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = "Photopin/0.1 (photo-location-backend)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Queries shorter than this never leave the process.
pub const MIN_SUGGEST_CHARS: usize = 2;
const SUGGEST_LIMIT: usize = 10;

#[derive(Deserialize, Debug, Clone)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    name: Option<String>,
}

/// Resolve a place name to its best match.
///
/// Empty input is rejected here, before any network traffic.
pub fn geocode_place(place: &str) -> Result<Place, GeocodeError> {
    let query = place.trim();
    if query.is_empty() {
        return Err(GeocodeError::EmptyQuery);
    }

    let results = search(query, 1)?;
    let top = results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

    place_from(top)
}

/// Autocomplete candidates for a partial query.
///
/// Queries under [`MIN_SUGGEST_CHARS`] and every upstream failure produce
/// an empty list. Callers cannot distinguish "nothing matched" from
/// "the geocoder was down".
pub fn suggest_places(query: &str) -> Vec<Suggestion> {
    let query = query.trim();
    if query.chars().count() < MIN_SUGGEST_CHARS {
        return Vec::new();
    }

    match search(query, SUGGEST_LIMIT) {
        Ok(results) => results
            .into_iter()
            .filter_map(|r| suggestion_from(r).ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn search(query: &str, limit: usize) -> Result<Vec<NominatimResult>, GeocodeError> {
    let url = format!(
        "{}?q={}&format=json&limit={}&addressdetails=0",
        NOMINATIM_ENDPOINT,
        urlencode(query),
        limit,
    );

    let response = ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(code, _) => {
                GeocodeError::Network(format!("geocoder returned HTTP {}", code))
            }
            ureq::Error::Transport(t) => classify_transport_error(t.to_string()),
        })?;

    response
        .into_json()
        .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))
}

/// ureq surfaces a hit deadline as an I/O transport error; everything we
/// can tell apart from its message becomes [`GeocodeError::Timeout`].
fn classify_transport_error(message: String) -> GeocodeError {
    let lower = message.to_lowercase();
    if lower.contains("timed out") || lower.contains("timeout") {
        GeocodeError::Timeout
    } else {
        GeocodeError::Network(message)
    }
}

fn place_from(result: NominatimResult) -> Result<Place, GeocodeError> {
    let (lat, lon) = parse_coords(&result)?;
    Ok(Place {
        lat,
        lon,
        display_name: result.display_name,
    })
}

fn suggestion_from(result: NominatimResult) -> Result<Suggestion, GeocodeError> {
    let (lat, lon) = parse_coords(&result)?;
    let name = match result.name {
        Some(ref n) if !n.is_empty() => n.clone(),
        _ => short_name(&result.display_name),
    };

    Ok(Suggestion {
        name,
        display_name: result.display_name,
        lat,
        lon,
    })
}

fn parse_coords(result: &NominatimResult) -> Result<(f64, f64), GeocodeError> {
    let lat: f64 = result
        .lat
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad latitude '{}'", result.lat)))?;
    let lon: f64 = result
        .lon
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad longitude '{}'", result.lon)))?;
    Ok((lat, lon))
}

/// First comma-separated component of a Nominatim display name.
fn short_name(display_name: &str) -> String {
    display_name
        .split(',')
        .next()
        .unwrap_or(display_name)
        .trim()
        .to_string()
}

fn urlencode(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ' ' => "%20".to_string(),
            '&' => "%26".to_string(),
            '=' => "%3D".to_string(),
            '+' => "%2B".to_string(),
            ',' => "%2C".to_string(),
            _ if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '~' => {
                c.to_string()
            }
            _ => format!("%{:02X}", c as u32),
        })
        .collect()
}
