//! HTTP layer for both services.
//!
//! Each service gets its own router so the two binaries stay independently
//! deployable. Handlers are stateless; every response allows any origin
//! because the frontend is served from elsewhere.

mod geocode_handlers;
mod gps_handlers;

use axum::http::header::{self, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;

/// Router for the GPS extraction service.
pub fn gps_router() -> Router {
    Router::new()
        .route("/", get(gps_handlers::index))
        .route("/api/analyze", post(gps_handlers::analyze).options(preflight))
        .route("/api/landmarks", get(gps_handlers::landmarks))
        .layer(allow_any_origin())
}

/// Router for the geocoding service.
pub fn geocode_router() -> Router {
    Router::new()
        .route("/", get(geocode_handlers::index))
        .route("/api/geocode", post(geocode_handlers::geocode).options(preflight))
        .route("/api/suggest", post(geocode_handlers::suggest).options(preflight))
        .layer(allow_any_origin())
}

/// Every response carries `Access-Control-Allow-Origin: *`; the frontend
/// is served from a separate origin.
fn allow_any_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}

/// Bind and serve until the process is killed.
pub async fn serve(app: Router, host: &str, port: u16) {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
}

/// An error at the request boundary: status plus the message that lands
/// in the `{"error": ...}` body.
pub(crate) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody { error: self.1 };
        (self.0, Json(body)).into_response()
    }
}

pub(crate) fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

/// CORS preflight: 204 with no body, advertising the methods and headers
/// the services accept.
async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}
