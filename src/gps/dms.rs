//! Degrees/minutes/seconds conversion.
//!
//! EXIF stores GPS coordinates as three rationals plus a reference letter
//! (`N`/`S` for latitude, `E`/`W` for longitude). The reference determines
//! the sign of the decimal value.

/// Which axis a coordinate value belongs to. Picks the reference letters
/// when converting back to DMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Convert a DMS triple and reference letter into signed decimal degrees.
///
/// Assumes well-formed non-negative input; `S` and `W` negate the result.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, reference: char) -> f64 {
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    match reference {
        'S' | 'W' => -decimal,
        _ => decimal,
    }
}

/// Inverse of [`dms_to_decimal`]: split a signed decimal value into a DMS
/// triple and the reference letter for the given axis.
pub fn decimal_to_dms(value: f64, axis: Axis) -> (f64, f64, f64, char) {
    let reference = match axis {
        Axis::Latitude => {
            if value < 0.0 {
                'S'
            } else {
                'N'
            }
        }
        Axis::Longitude => {
            if value < 0.0 {
                'W'
            } else {
                'E'
            }
        }
    };

    let magnitude = value.abs();
    let degrees = magnitude.trunc();
    let minutes = ((magnitude - degrees) * 60.0).trunc();
    let seconds = (magnitude - degrees - minutes / 60.0) * 3600.0;

    (degrees, minutes, seconds, reference)
}
