use axum::http::StatusCode;
use axum::response::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::gps::extract_gps;

use super::{api_error, ApiError};

// ─── POST /api/analyze ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub image: Option<String>,
    #[serde(default)]
    pub comment: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub lat: f64,
    pub lon: f64,
    pub comment: String,
    pub has_gps: bool,
}

pub async fn analyze(
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let start = Instant::now();

    let payload = req
        .image
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "no image provided"))?;

    let image_data = decode_image_payload(payload)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("invalid base64 image: {}", e)))?;

    // Every extraction failure is a problem with the submitted image.
    let coord = extract_gps(&image_data)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] POST /api/analyze -> {:.6},{:.6} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        coord.lat,
        coord.lon,
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(AnalyzeResponse {
        lat: coord.lat,
        lon: coord.lon,
        comment: req.comment,
        has_gps: true,
    }))
}

/// Accept either a bare base64 payload or a full data URL; browsers send
/// `data:image/jpeg;base64,<payload>` when reading files client-side.
fn decode_image_payload(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let encoded = match payload.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };
    BASE64.decode(encoded.trim())
}

// ─── GET /api/landmarks ──────────────────────────────────────────

#[derive(Serialize)]
pub struct LandmarksResponse {
    pub status: &'static str,
}

pub async fn landmarks() -> Json<LandmarksResponse> {
    Json(LandmarksResponse { status: "ok" })
}

// ─── GET / ───────────────────────────────────────────────────────

pub async fn index() -> &'static str {
    "Photo Location Map API (EXIF GPS)"
}
