use chrono::{NaiveDateTime, Timelike};
use crate::errors::FormatError;
use crate::models::forecast::{CloudSample, ForecastRecord};

/// Local hours around sunset that are inspected for afterglow conditions.
///
/// The window is fixed and not derived from the forecast's sunset time, which means a day
/// where the sun sets well outside these hours will score on the wrong clouds (or none).
pub const SUNSET_WINDOW: [u32; 4] = [18, 19, 20, 21];

/// Selects the cloud samples for the sunset window from a full day forecast.
/// Chronological order of the hourly series is preserved and an empty result is
/// a valid outcome (insufficient data), not an error.
///
/// # Arguments
///
/// * 'record' - the forecast record to extract from
pub fn extract_sunset_window(record: &ForecastRecord) -> Result<Vec<CloudSample>, FormatError> {
    let mut samples: Vec<CloudSample> = Vec::with_capacity(SUNSET_WINDOW.len());

    for h in &record.hourly_series {
        let hour = parse_hour(&h.timestamp)?;
        if SUNSET_WINDOW.contains(&hour) {
            samples.push(CloudSample {
                hour,
                total: h.total,
                low: h.low,
                mid: h.mid,
                high: h.high,
            });
        }
    }

    Ok(samples)
}

/// Parses a forecast timestamp and returns the hour of day it encodes.
/// Accepts ISO 8601 local date times with or without seconds, e.g. '2025-06-01T18:00'.
///
/// # Arguments
///
/// * 'timestamp' - the timestamp to parse
pub fn parse_hour(timestamp: &str) -> Result<u32, FormatError> {
    Ok(parse_timestamp(timestamp)?.hour())
}

/// Parses a local forecast timestamp
///
/// # Arguments
///
/// * 'timestamp' - the timestamp to parse
pub fn parse_timestamp(timestamp: &str) -> Result<NaiveDateTime, FormatError> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| FormatError(timestamp.to_string()))
}
