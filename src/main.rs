use std::env;
use anyhow::Context;
use chrono::Utc;
use log::{error, info};
use crate::config::load_config;
use crate::logging::setup_logger;
use crate::manager_open_meteo::OpenMeteo;
use crate::manager_openaq::OpenAQ;
use crate::pipeline::evaluate;
use crate::scheduler::tomorrow;

mod config;
mod errors;
mod extraction;
mod logging;
mod manager_open_meteo;
mod manager_openaq;
mod manager_sun;
mod models;
mod pipeline;
mod report;
mod scheduler;
mod scoring;
mod sources;
mod tier;
mod worker;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() -> anyhow::Result<()> {
    let config_path = env::var("FIRECLOUD_CONFIG").unwrap_or(DEFAULT_CONFIG_PATH.to_string());
    let config = load_config(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path))?;

    setup_logger(&config.general).context("failed to set up logging")?;
    info!("firecloud version: {}", env!("CARGO_PKG_VERSION"));

    let open_meteo = OpenMeteo::new(
        &config.weather.api_url,
        config.geo_ref.lat,
        config.geo_ref.long,
        config.geo_ref.timezone.name());
    let openaq = OpenAQ::new(&config.air_quality.api_url, &config.air_quality.city);

    if let Some(schedule) = config.schedule {
        worker::run(&config, schedule, &open_meteo, &openaq);
    }

    let date = tomorrow(Utc::now(), config.geo_ref.timezone);
    let report = evaluate(&open_meteo, &openaq, &config.geo_ref, date, config.air_quality.default_pm25)
        .map_err(|e| {
            error!("{}", e);
            e
        })
        .context("forecast data is malformed")?;

    println!("{}", report);

    Ok(())
}
