//! EXIF GPS tag extraction.
//!
//! Works on raw image bytes (JPEG, TIFF, PNG, anything the `exif` reader
//! understands). The EXIF parser is treated as an opaque collaborator:
//! bytes in, tag fields out.

use super::dms::dms_to_decimal;
use super::types::{Coordinate, GpsError};
use exif::{Exif, In, Tag};
use std::io::Cursor;

/// Extract the GPS coordinate pair from an image's EXIF metadata.
pub fn extract_gps(image_data: &[u8]) -> Result<Coordinate, GpsError> {
    let exif = exif::Reader::new()
        .read_from_container(&mut Cursor::new(image_data))
        .map_err(|e| match e {
            exif::Error::NotFound(_) => GpsError::NoExif,
            other => GpsError::Decode(other.to_string()),
        })?;

    // No GPS tags at all is a distinct condition from a half-written set.
    if exif.get_field(Tag::GPSLatitude, In::PRIMARY).is_none()
        && exif.get_field(Tag::GPSLongitude, In::PRIMARY).is_none()
    {
        return Err(GpsError::NoGps);
    }

    let lat = read_coordinate(&exif, Tag::GPSLatitude, Tag::GPSLatitudeRef)?;
    let lon = read_coordinate(&exif, Tag::GPSLongitude, Tag::GPSLongitudeRef)?;

    Ok(Coordinate { lat, lon })
}

/// Read one axis: a rational DMS triple plus its reference letter.
fn read_coordinate(exif: &Exif, value_tag: Tag, ref_tag: Tag) -> Result<f64, GpsError> {
    let field = exif
        .get_field(value_tag, In::PRIMARY)
        .ok_or_else(|| GpsError::MalformedTags(format!("missing {}", value_tag)))?;

    let rationals = match field.value {
        exif::Value::Rational(ref v) if v.len() >= 3 => v,
        exif::Value::Rational(_) => {
            return Err(GpsError::MalformedTags(format!(
                "{} has fewer than three components",
                value_tag
            )))
        }
        _ => {
            return Err(GpsError::MalformedTags(format!(
                "{} is not a rational triple",
                value_tag
            )))
        }
    };

    let reference = exif
        .get_field(ref_tag, In::PRIMARY)
        .ok_or_else(|| GpsError::MalformedTags(format!("missing {}", ref_tag)))?;

    // Ascii values render quoted, e.g. "N".
    let ref_text = reference.display_value().to_string();
    let ref_char = ref_text
        .trim_matches('"')
        .trim()
        .chars()
        .next()
        .ok_or_else(|| GpsError::MalformedTags(format!("empty {}", ref_tag)))?;

    Ok(dms_to_decimal(
        rationals[0].to_f64(),
        rationals[1].to_f64(),
        rationals[2].to_f64(),
        ref_char,
    ))
}
