//! GPS extraction subsystem.
//!
//! Reads the EXIF block of an uploaded image, pulls the GPS latitude and
//! longitude tags, and converts their degrees/minutes/seconds form into
//! signed decimal coordinates.

pub mod dms;
pub mod extract;
pub mod types;

pub use dms::{decimal_to_dms, dms_to_decimal, Axis};
pub use extract::extract_gps;
pub use types::{Coordinate, GpsError};
