#![allow(dead_code)]

//! Shared helpers for the integration suites.

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn options(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ─── Image fixtures ──────────────────────────────────────────────

fn ifd_entry(tag: u16, typ: u16, count: u32, value: u32) -> Vec<u8> {
    let mut entry = Vec::with_capacity(12);
    entry.extend_from_slice(&tag.to_le_bytes());
    entry.extend_from_slice(&typ.to_le_bytes());
    entry.extend_from_slice(&count.to_le_bytes());
    entry.extend_from_slice(&value.to_le_bytes());
    entry
}

/// Little-endian TIFF with GPS tags for 35 deg 40' 0" N, 139 deg 44' 45" E.
pub fn tiff_with_gps() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());

    // IFD0: a single entry pointing at the GPS IFD at offset 26.
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend(ifd_entry(0x8825, 4, 1, 26));
    buf.extend_from_slice(&0u32.to_le_bytes());

    // GPS IFD: refs inline, rational triples at 80 and 104.
    buf.extend_from_slice(&4u16.to_le_bytes());
    buf.extend(ifd_entry(0x0001, 2, 2, u32::from_le_bytes([b'N', 0, 0, 0])));
    buf.extend(ifd_entry(0x0002, 5, 3, 80));
    buf.extend(ifd_entry(0x0003, 2, 2, u32::from_le_bytes([b'E', 0, 0, 0])));
    buf.extend(ifd_entry(0x0004, 5, 3, 104));
    buf.extend_from_slice(&0u32.to_le_bytes());

    for (num, den) in [(35u32, 1u32), (40, 1), (0, 1), (139, 1), (44, 1), (45, 1)] {
        buf.extend_from_slice(&num.to_le_bytes());
        buf.extend_from_slice(&den.to_le_bytes());
    }
    buf
}

/// Bare JPEG without any APP1 segment, hence no EXIF.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}
