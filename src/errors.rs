use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("ConfigError::Toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("ConfigError::Schedule: {0}")]
    Schedule(String),
}

/// Errors from the weather provider. The pipeline treats all of them as "no forecast".
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("ForecastError::OpenMeteo: {0}")]
    OpenMeteo(String),
    #[error("ForecastError::Document: {0}")]
    Document(String),
}
impl From<ureq::Error> for ForecastError {
    fn from(e: ureq::Error) -> Self {
        ForecastError::OpenMeteo(e.to_string())
    }
}
impl From<serde_json::Error> for ForecastError {
    fn from(e: serde_json::Error) -> Self {
        ForecastError::Document(e.to_string())
    }
}

/// Errors from the pollutant provider. The pipeline replaces all of them with a default level.
#[derive(Error, Debug)]
pub enum AirQualityError {
    #[error("AirQualityError::OpenAQ: {0}")]
    OpenAQ(String),
    #[error("AirQualityError::Document: {0}")]
    Document(String),
    #[error("AirQualityError::NoData: no pm25 measurement for {0}")]
    NoData(String),
}
impl From<ureq::Error> for AirQualityError {
    fn from(e: ureq::Error) -> Self {
        AirQualityError::OpenAQ(e.to_string())
    }
}
impl From<serde_json::Error> for AirQualityError {
    fn from(e: serde_json::Error) -> Self {
        AirQualityError::Document(e.to_string())
    }
}

/// Malformed timestamp in otherwise delivered forecast data
#[derive(Error, Debug, PartialEq)]
#[error("malformed forecast timestamp: '{0}'")]
pub struct FormatError(pub String);

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LoggingError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("LoggingError::Config: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("LoggingError::SetLogger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
