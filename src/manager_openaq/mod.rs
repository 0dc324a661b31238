use std::time::Duration;
use log::debug;
use ureq::Agent;
use crate::errors::AirQualityError;
use crate::models::openaq::Latest;
use crate::sources::PollutantSource;

/// Struct for retrieving the latest PM2.5 measurement for a city from OpenAQ
pub struct OpenAQ {
    agent: Agent,
    api_url: String,
    city: String,
}

impl OpenAQ {
    /// Returns an OpenAQ struct ready for fetching PM2.5 levels
    ///
    /// # Arguments
    ///
    /// * 'api_url' - url to the OpenAQ latest measurements endpoint
    /// * 'city' - the city to get measurements for
    pub fn new(api_url: &str, city: &str) -> OpenAQ {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self { agent, api_url: api_url.to_string(), city: city.to_string() }
    }
}

impl PollutantSource for OpenAQ {
    fn pm25(&self) -> Result<f64, AirQualityError> {
        debug!("requesting pm25 for {} from {}", self.city, self.api_url);

        let json = self.agent
            .get(&self.api_url)
            .query("city", &self.city)
            .query("parameter", "pm25")
            .query("limit", "1")
            .call()?
            .body_mut()
            .read_to_string()?;

        parse_latest(&json, &self.city)
    }
}

/// Picks the first measurement of the first result in an OpenAQ latest document
///
/// # Arguments
///
/// * 'json' - the raw response document
/// * 'city' - the city asked for, used in error reporting
pub fn parse_latest(json: &str, city: &str) -> Result<f64, AirQualityError> {
    let latest: Latest = serde_json::from_str(json)?;

    let result = latest.results
        .into_iter()
        .next()
        .ok_or_else(|| AirQualityError::NoData(city.to_string()))?;

    let measurement = result.measurements
        .into_iter()
        .next()
        .ok_or_else(|| AirQualityError::NoData(city.to_string()))?;

    debug!("pm25 {} {} ({}) at {}",
        measurement.value,
        measurement.unit.as_deref().unwrap_or("µg/m³"),
        measurement.parameter.as_deref().unwrap_or("pm25"),
        result.location.as_deref().unwrap_or(city));

    Ok(measurement.value)
}
