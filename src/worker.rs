use std::thread;
use chrono::Utc;
use log::{error, info};
use crate::config::{Config, Schedule};
use crate::pipeline::evaluate;
use crate::scheduler::{get_next_run_time, tomorrow};
use crate::sources::{ForecastSource, PollutantSource};

/// Pause after a failed evaluation before the next run time is calculated
const RETRY_PAUSE: std::time::Duration = std::time::Duration::from_secs(600);

/// Pause after a successful evaluation so the same run time isn't picked up twice
const SETTLE_PAUSE: std::time::Duration = std::time::Duration::from_secs(60);

/// Runs evaluations forever according to the schedule, printing each report.
/// Malformed forecast data is logged and the service carries on with the next run.
///
/// # Arguments
///
/// * 'config' - the configuration
/// * 'schedule' - when to run
/// * 'forecast_source' - provider of the cloud forecast
/// * 'pollutant_source' - provider of the PM2.5 level
pub fn run(config: &Config, schedule: Schedule, forecast_source: &impl ForecastSource, pollutant_source: &impl PollutantSource) -> ! {
    let tz = config.geo_ref.timezone;
    info!("service mode, schedule {:?} in {}", schedule, tz.name());

    loop {
        let now = Utc::now().with_timezone(&tz);
        let next = get_next_run_time(now, schedule, &config.geo_ref);
        info!("next evaluation at {}", next.format("%Y-%m-%d %H:%M:%S"));

        thread::sleep((next - now).to_std().unwrap_or_default());

        let date = tomorrow(Utc::now(), tz);
        match evaluate(forecast_source, pollutant_source, &config.geo_ref, date, config.air_quality.default_pm25) {
            Ok(report) => {
                println!("{}", report);
                thread::sleep(SETTLE_PAUSE);
            },
            Err(e) => {
                error!("evaluation for {} failed: {}", date, e);
                thread::sleep(RETRY_PAUSE);
            },
        }
    }
}
