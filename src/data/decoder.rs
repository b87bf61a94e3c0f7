use thiserror::Error;

use super::model::Observation;

// ---------------------------------------------------------------------------
// Decode failures
// ---------------------------------------------------------------------------

/// Pressure sentinel meaning "not measured" in the source data.
pub const PRESSURE_MISSING: i32 = -999;

/// Why a single data line could not be decoded.
///
/// Never fatal: the parser drops the offending line and keeps scanning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected at least 7 fields, found {0}")]
    MalformedRecord(usize),
    #[error("malformed coordinate {0:?}")]
    MalformedCoordinate(String),
    #[error("malformed wind speed {0:?}")]
    MalformedWind(String),
}

// ---------------------------------------------------------------------------
// Line decoder
// ---------------------------------------------------------------------------

/// Decode one comma-delimited data line into an [`Observation`].
///
/// Layout: `DATE,TIME,RECORD_ID,STATUS,LAT,LON,WIND[,PRESSURE,...]`.
/// Latitude and longitude carry a trailing hemisphere letter
/// (`"28.0N"`, `"94.8W"`). Pure function of the line text.
pub fn decode_observation(line: &str, sequence_index: u32) -> Result<Observation, DecodeError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 7 {
        return Err(DecodeError::MalformedRecord(fields.len()));
    }

    let timestamp = format!("{} {}", fields[0], fields[1]);
    let latitude = decode_coordinate(fields[4], Axis::Latitude)?;
    let longitude = decode_coordinate(fields[5], Axis::Longitude)?;
    let wind_knots = fields[6]
        .parse::<i32>()
        .map_err(|_| DecodeError::MalformedWind(fields[6].to_string()))?;

    // Pressure is absent in older records; the -999 sentinel and
    // unparseable text both normalize to "unknown".
    let pressure_hpa = fields
        .get(7)
        .and_then(|f| f.parse::<i32>().ok())
        .filter(|&p| p != PRESSURE_MISSING);

    Ok(Observation {
        sequence_index,
        timestamp,
        latitude,
        longitude,
        wind_knots,
        pressure_hpa,
    })
}

#[derive(Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

/// Split `"28.0N"` into magnitude and hemisphere letter and apply the
/// sign: south and west are negative.
fn decode_coordinate(field: &str, axis: Axis) -> Result<f64, DecodeError> {
    let malformed = || DecodeError::MalformedCoordinate(field.to_string());

    let mut chars = field.chars();
    let hemisphere = chars.next_back().ok_or_else(malformed)?;
    let magnitude: f64 = chars.as_str().parse().map_err(|_| malformed())?;

    match (axis, hemisphere) {
        (Axis::Latitude, 'N') => Ok(magnitude),
        (Axis::Latitude, 'S') => Ok(-magnitude),
        (Axis::Longitude, 'E') => Ok(magnitude),
        (Axis::Longitude, 'W') => Ok(-magnitude),
        _ => Err(malformed()),
    }
}
