use std::time::Duration;
use chrono::NaiveDate;
use log::debug;
use ureq::Agent;
use crate::errors::ForecastError;
use crate::models::forecast::{ForecastRecord, HourlyCloud};
use crate::models::open_meteo::OpenMeteoForecast;
use crate::sources::ForecastSource;

/// Struct for retrieving cloud cover forecasts from Open-Meteo
pub struct OpenMeteo {
    agent: Agent,
    api_url: String,
    lat: f64,
    long: f64,
    timezone: String,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching forecasts for one location
    ///
    /// # Arguments
    ///
    /// * 'api_url' - url to the Open-Meteo forecast endpoint
    /// * 'lat' - latitude for the point to get forecasts for
    /// * 'long' - longitude for the point to get forecasts for
    /// * 'timezone' - IANA timezone in which hourly timestamps are reported
    pub fn new(api_url: &str, lat: f64, long: f64, timezone: &str) -> OpenMeteo {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self { agent, api_url: api_url.to_string(), lat, long, timezone: timezone.to_string() }
    }
}

impl ForecastSource for OpenMeteo {
    /// Retrieves hourly cloud cover (total, low, mid and high) and the sunset time
    /// for the given date
    ///
    /// # Arguments
    ///
    /// * 'date' - the date to get a forecast for
    fn forecast(&self, date: NaiveDate) -> Result<ForecastRecord, ForecastError> {
        let date = date.format("%Y-%m-%d").to_string();
        debug!("requesting forecast for {} from {}", date, self.api_url);

        let json = self.agent
            .get(&self.api_url)
            .query("latitude", format!("{:0.4}", self.lat))
            .query("longitude", format!("{:0.4}", self.long))
            .query("hourly", "cloudcover,cloudcover_low,cloudcover_mid,cloudcover_high")
            .query("daily", "sunset")
            .query("timezone", &self.timezone)
            .query("start_date", &date)
            .query("end_date", &date)
            .call()?
            .body_mut()
            .read_to_string()?;

        parse_forecast(&json)
    }
}

/// Transforms the column oriented Open-Meteo document into a forecast record
///
/// # Arguments
///
/// * 'json' - the raw response document
pub fn parse_forecast(json: &str) -> Result<ForecastRecord, ForecastError> {
    let forecast: OpenMeteoForecast = serde_json::from_str(json)?;
    let hourly = forecast.hourly;

    let n = hourly.time.len();
    if [hourly.cloudcover.len(), hourly.cloudcover_low.len(), hourly.cloudcover_mid.len(), hourly.cloudcover_high.len()]
        .iter()
        .any(|l| *l != n) {
        return Err(ForecastError::Document("hourly column lengths differ".to_string()));
    }

    let hourly_series = hourly.time
        .into_iter()
        .enumerate()
        .map(|(i, timestamp)| HourlyCloud {
            timestamp,
            total: hourly.cloudcover[i],
            low: hourly.cloudcover_low[i],
            mid: hourly.cloudcover_mid[i],
            high: hourly.cloudcover_high[i],
        })
        .collect::<Vec<HourlyCloud>>();

    debug!("forecast with {} hours in timezone {}", hourly_series.len(), forecast.timezone.as_deref().unwrap_or("unknown"));

    Ok(ForecastRecord {
        sunset_timestamp: forecast.daily.sunset.into_iter().next(),
        hourly_series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "latitude": 31.25,
        "longitude": 121.5,
        "generationtime_ms": 0.08,
        "utc_offset_seconds": 28800,
        "timezone": "Asia/Shanghai",
        "timezone_abbreviation": "CST",
        "elevation": 4.0,
        "hourly_units": {"time": "iso8601", "cloudcover": "%"},
        "hourly": {
            "time": ["2025-06-02T17:00", "2025-06-02T18:00", "2025-06-02T19:00"],
            "cloudcover": [40, 55, 70],
            "cloudcover_low": [5, 10, 15],
            "cloudcover_mid": [20, 30, 40],
            "cloudcover_high": [15, 20, 25]
        },
        "daily_units": {"time": "iso8601", "sunset": "iso8601"},
        "daily": {
            "time": ["2025-06-02"],
            "sunset": ["2025-06-02T18:58"]
        }
    }"#;

    #[test]
    fn parses_columns_into_hours() {
        let record = parse_forecast(RESPONSE).unwrap();

        assert_eq!(record.sunset_timestamp.as_deref(), Some("2025-06-02T18:58"));
        assert_eq!(record.hourly_series.len(), 3);
        assert_eq!(record.hourly_series[1], HourlyCloud {
            timestamp: "2025-06-02T18:00".to_string(),
            total: 55.0,
            low: 10.0,
            mid: 30.0,
            high: 20.0,
        });
    }

    #[test]
    fn column_length_mismatch_is_a_document_error() {
        let broken = RESPONSE.replace("\"cloudcover_mid\": [20, 30, 40]", "\"cloudcover_mid\": [20, 30]");
        assert!(matches!(parse_forecast(&broken), Err(ForecastError::Document(_))));
    }

    #[test]
    fn null_values_are_a_document_error() {
        let broken = RESPONSE.replace("[40, 55, 70]", "[40, null, 70]");
        assert!(matches!(parse_forecast(&broken), Err(ForecastError::Document(_))));
    }

    #[test]
    fn missing_sunset_is_tolerated() {
        let no_sunset = RESPONSE.replace("[\"2025-06-02T18:58\"]", "[]");
        assert!(parse_forecast(&no_sunset).unwrap().sunset_timestamp.is_none());
    }
}
