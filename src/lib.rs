//! Photopin backend library.
//!
//! Two independent HTTP services share this crate: the GPS extraction
//! service (EXIF GPS tags out of uploaded photos) and the geocoding
//! service (place names resolved through Nominatim). Neither holds any
//! state across requests.

pub mod geocode;
pub mod gps;
pub mod landmarks;
pub mod server;
