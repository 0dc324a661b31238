use chrono::NaiveDate;
use log::{debug, info, warn};
use crate::config::GeoRef;
use crate::errors::FormatError;
use crate::extraction::{extract_sunset_window, parse_timestamp, SUNSET_WINDOW};
use crate::manager_sun::get_sunset;
use crate::models::forecast::ForecastRecord;
use crate::report::{Report, Sunset};
use crate::scoring::vividness_score;
use crate::sources::{ForecastSource, PollutantLevel, PollutantSource};
use crate::tier::Tier;

/// Evaluates the afterglow for the given date.
///
/// A failing forecast source gives a report with score 0 flagged as unavailable, and a
/// failing pollutant source is replaced by the default level. Only malformed timestamps in
/// a delivered forecast are returned as errors.
///
/// # Arguments
///
/// * 'forecast_source' - provider of the cloud forecast
/// * 'pollutant_source' - provider of the PM2.5 level
/// * 'geo_ref' - the location, used to calculate sunset when the forecast lacks it
/// * 'date' - the local date to evaluate
/// * 'default_pm25' - PM2.5 level to use when none can be measured
pub fn evaluate(
    forecast_source: &impl ForecastSource,
    pollutant_source: &impl PollutantSource,
    geo_ref: &GeoRef,
    date: NaiveDate,
    default_pm25: f64) -> Result<Report, FormatError> {

    let forecast = forecast_source
        .forecast(date)
        .map_err(|e| warn!("weather forecast unavailable: {}", e))
        .ok();
    let pollutant = PollutantLevel::or_default(pollutant_source.pm25(), default_pm25);

    let Some(record) = forecast else {
        return Ok(Report {
            date,
            score: 0.0,
            tier: Tier::from_score(0.0),
            pollutant,
            sunset: get_sunset_for(None, geo_ref, date)?,
            forecast_available: false,
            sample_count: 0,
        });
    };

    let sunset = get_sunset_for(Some(&record), geo_ref, date)?;
    if sunset.outside_window() {
        warn!("sunset at {} falls outside the observation window {:?}", sunset.time.format("%H:%M"), SUNSET_WINDOW);
    }

    let samples = extract_sunset_window(&record)?;
    debug!("{} of {} forecast hours inside the sunset window: {:?}",
        samples.len(), record.hourly_series.len(), samples.iter().map(|s| s.hour).collect::<Vec<u32>>());
    if samples.is_empty() {
        warn!("no forecast hours inside the sunset window, insufficient data");
    }

    let score = vividness_score(&samples, pollutant.value);
    let tier = Tier::from_score(score);
    info!("score {:.3} ({:?}) with pm25 {}", score, tier, pollutant.value);

    Ok(Report {
        date,
        score,
        tier,
        pollutant,
        sunset,
        forecast_available: true,
        sample_count: samples.len(),
    })
}

/// Returns the forecast's sunset, or a calculated one when the forecast has none
///
/// # Arguments
///
/// * 'record' - the forecast, if any
/// * 'geo_ref' - the location
/// * 'date' - the local date
fn get_sunset_for(record: Option<&ForecastRecord>, geo_ref: &GeoRef, date: NaiveDate) -> Result<Sunset, FormatError> {
    if let Some(timestamp) = record.and_then(|r| r.sunset_timestamp.as_deref()) {
        return Ok(Sunset { time: parse_timestamp(timestamp)?, calculated: false });
    }

    let time = get_sunset(date, geo_ref.lat, geo_ref.long, geo_ref.timezone);
    debug!("using calculated sunset {}", time);

    Ok(Sunset { time, calculated: true })
}
