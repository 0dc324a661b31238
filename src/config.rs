use std::fs;
use chrono_tz::Tz;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

/// PM2.5 level assumed when the air quality provider can't deliver (moderate pollution)
pub const DEFAULT_PM25: f64 = 50.0;

#[derive(Deserialize)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
    pub timezone: Tz,
}

#[derive(Deserialize)]
pub struct WeatherParameters {
    pub api_url: String,
}

#[derive(Deserialize)]
pub struct AirQualityParameters {
    pub api_url: String,
    pub city: String,
    #[serde(default = "default_pm25")]
    pub default_pm25: f64,
}

/// When to evaluate in service mode. Without a schedule the program evaluates once and exits.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "trigger", rename_all = "snake_case")]
pub enum Schedule {
    /// Every day at a fixed local time
    Fixed { hour: u32, minute: u32 },
    /// Every day the given number of minutes before the calculated sunset
    Sunset { advance_minutes: i64 },
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub weather: WeatherParameters,
    pub air_quality: AirQualityParameters,
    pub schedule: Option<Schedule>,
    pub general: General,
}

fn default_pm25() -> f64 {
    DEFAULT_PM25
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses configuration from a toml document
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if let Some(Schedule::Fixed { hour, minute }) = config.schedule {
        if hour > 23 || minute > 59 {
            return Err(ConfigError::Schedule(format!("invalid fixed time {:02}:{:02}", hour, minute)));
        }
    }

    Ok(config)
}
