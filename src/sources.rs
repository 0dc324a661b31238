use std::fmt;
use std::fmt::Formatter;
use chrono::NaiveDate;
use log::warn;
use crate::errors::{AirQualityError, ForecastError};
use crate::models::forecast::ForecastRecord;

/// Something that can deliver a one day cloud forecast for the fixed location
pub trait ForecastSource {
    /// Retrieves the forecast for the given local date
    ///
    /// # Arguments
    ///
    /// * 'date' - the date to get a forecast for
    fn forecast(&self, date: NaiveDate) -> Result<ForecastRecord, ForecastError>;
}

/// Something that can deliver a current PM2.5 concentration (μg/m³)
pub trait PollutantSource {
    fn pm25(&self) -> Result<f64, AirQualityError>;
}

/// Where a pollutant level came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Measured,
    Default,
}

/// PM2.5 level used for scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantLevel {
    pub value: f64,
    pub origin: Origin,
}

impl PollutantLevel {
    /// Returns the measured level, or the given default if the measurement failed.
    /// A failure is never propagated, only logged.
    ///
    /// # Arguments
    ///
    /// * 'result' - outcome of a pollutant fetch
    /// * 'default' - level to use when the fetch failed
    pub fn or_default(result: Result<f64, AirQualityError>, default: f64) -> PollutantLevel {
        match result {
            Ok(value) if value.is_finite() && value >= 0.0 => PollutantLevel { value, origin: Origin::Measured },
            Ok(value) => {
                warn!("discarding implausible pm25 value {}, using default {}", value, default);
                PollutantLevel { value: default, origin: Origin::Default }
            },
            Err(e) => {
                warn!("{}, using default pm25 {}", e, default);
                PollutantLevel { value: default, origin: Origin::Default }
            },
        }
    }

    pub fn is_default(&self) -> bool {
        self.origin == Origin::Default
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for PollutantLevel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_default() {
            write!(f, "{}μg/m³ (default, no measurement available)", self.value)
        } else {
            write!(f, "{}μg/m³", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_value_is_kept() {
        let level = PollutantLevel::or_default(Ok(23.5), 50.0);
        assert_eq!(level, PollutantLevel { value: 23.5, origin: Origin::Measured });
        assert!(!level.is_default());
    }

    #[test]
    fn failure_falls_back_to_default() {
        let level = PollutantLevel::or_default(Err(AirQualityError::NoData("Shanghai".to_string())), 50.0);
        assert_eq!(level.value, 50.0);
        assert!(level.is_default());
    }

    #[test]
    fn implausible_values_fall_back_to_default() {
        assert!(PollutantLevel::or_default(Ok(-3.0), 50.0).is_default());
        assert!(PollutantLevel::or_default(Ok(f64::NAN), 50.0).is_default());
    }

    #[test]
    fn display_marks_default() {
        let level = PollutantLevel { value: 50.0, origin: Origin::Default };
        assert!(level.to_string().contains("default"));
        let level = PollutantLevel { value: 12.0, origin: Origin::Measured };
        assert_eq!(level.to_string(), "12μg/m³");
    }
}
