use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::geocode::{geocode_place, suggest_places, GeocodeError, Suggestion};

use super::{api_error, ApiError};

// ─── POST /api/geocode ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeocodeRequest {
    pub place: Option<String>,
}

#[derive(Serialize)]
pub struct GeocodeResponse {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

pub async fn geocode(
    Json(req): Json<GeocodeRequest>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    let start = Instant::now();

    let place = req.place.unwrap_or_default();
    // Reject empty input here so nothing hits the blocking pool or the network.
    if place.trim().is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            GeocodeError::EmptyQuery.to_string(),
        ));
    }

    let result = tokio::task::spawn_blocking(move || geocode_place(&place))
        .await
        .map_err(|e| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("unexpected error: {}", e),
            )
        })?;

    let found = result.map_err(geocode_api_error)?;

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] POST /api/geocode -> {} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        found.display_name,
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(GeocodeResponse {
        lat: found.lat,
        lon: found.lon,
        display_name: found.display_name,
    }))
}

fn geocode_api_error(err: GeocodeError) -> ApiError {
    let status = match err {
        GeocodeError::EmptyQuery | GeocodeError::NotFound(_) | GeocodeError::Timeout => {
            StatusCode::BAD_REQUEST
        }
        GeocodeError::Network(_) | GeocodeError::InvalidResponse(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    api_error(status, err.to_string())
}

// ─── POST /api/suggest ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct SuggestRequest {
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Degrades to an empty list on every failure, including a crashed
/// blocking task. Short queries never leave the process.
pub async fn suggest(Json(req): Json<SuggestRequest>) -> Json<SuggestResponse> {
    let start = Instant::now();

    let query = req.query.unwrap_or_default();
    let suggestions = tokio::task::spawn_blocking(move || suggest_places(&query))
        .await
        .unwrap_or_default();

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] POST /api/suggest -> {} candidates ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        suggestions.len(),
        elapsed.as_secs_f64() * 1000.0,
    );

    Json(SuggestResponse { suggestions })
}

// ─── GET / ───────────────────────────────────────────────────────

pub async fn index() -> &'static str {
    "Photo Location Geocoding API (Nominatim)"
}
