//! Core types for the GPS extraction subsystem.

use serde::Serialize;
use std::fmt;

/// A decimal-degree coordinate pair extracted from a photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// GPS extraction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpsError {
    /// The image carries no EXIF block at all.
    NoExif,
    /// EXIF exists but contains no GPS tags.
    NoGps,
    /// GPS tags exist but are incomplete or not in the expected form.
    MalformedTags(String),
    /// The container could not be decoded as an image with EXIF metadata.
    Decode(String),
}

impl fmt::Display for GpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoExif => write!(f, "no EXIF data found in image"),
            Self::NoGps => write!(f, "no GPS data found in EXIF metadata"),
            Self::MalformedTags(detail) => write!(f, "malformed GPS tags: {}", detail),
            Self::Decode(detail) => write!(f, "could not decode image: {}", detail),
        }
    }
}

impl std::error::Error for GpsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(GpsError::NoExif.to_string(), "no EXIF data found in image");
        assert_eq!(
            GpsError::NoGps.to_string(),
            "no GPS data found in EXIF metadata"
        );
        assert_eq!(
            GpsError::MalformedTags("missing GPSLongitude".into()).to_string(),
            "malformed GPS tags: missing GPSLongitude"
        );
    }

    #[test]
    fn test_coordinate_serializes_flat() {
        let c = Coordinate { lat: 35.0, lon: 139.5 };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "{\"lat\":35.0,\"lon\":139.5}");
    }
}
