use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use chrono_tz::Tz;

/// Zenith at sunset including atmospheric refraction and the sun's radius
const SUNSET_ZENITH: f64 = 90.833;

/// Calculates the local sunset time for the given date and location using the NOAA
/// solar position approximation (accurate to about a minute at mid latitudes).
///
/// During polar day or night the hour angle is clamped, giving the time the sun is
/// closest to the horizon instead.
///
/// # Arguments
///
/// * 'date' - the local date
/// * 'lat' - latitude in decimal degrees
/// * 'long' - longitude in decimal degrees, east positive
/// * 'tz' - timezone the result is expressed in
pub fn get_sunset(date: NaiveDate, lat: f64, long: f64, tz: Tz) -> NaiveDateTime {
    let minutes = get_sunset_utc_minutes(date, lat, long);
    let utc = date.and_time(NaiveTime::MIN).and_utc() + TimeDelta::seconds((minutes * 60.0).round() as i64);

    utc.with_timezone(&tz).naive_local()
}

/// Minutes after 00:00 UTC on the given date when the sun sets
///
/// # Arguments
///
/// * 'date' - the date
/// * 'lat' - latitude in decimal degrees
/// * 'long' - longitude in decimal degrees, east positive
fn get_sunset_utc_minutes(date: NaiveDate, lat: f64, long: f64) -> f64 {
    let t = (get_julian_day(date) - 2451545.0) / 36525.0;

    let mean_long = (280.46646 + t * (36000.76983 + t * 0.0003032)) % 360.0;
    let mean_anomaly = ((357.52911 + t * (35999.05029 - t * 0.0001537)) % 360.0).to_radians();
    let eccentricity = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    let center = mean_anomaly.sin() * (1.914602 - t * (0.004817 + t * 0.000014))
        + (2.0 * mean_anomaly).sin() * (0.019993 - t * 0.000101)
        + (3.0 * mean_anomaly).sin() * 0.000289;

    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent_long = (mean_long + center - 0.00569 - 0.00478 * omega.sin()).to_radians();

    let mean_obliquity = 23.0 + 26.0 / 60.0
        + 21.448 / 3600.0
        - (46.8150 * t + 0.00059 * t * t - 0.001813 * t * t * t) / 3600.0;
    let obliquity = (mean_obliquity + 0.00256 * omega.cos()).to_radians();

    let declination = (obliquity.sin() * apparent_long.sin()).asin();

    let y = (obliquity / 2.0).tan().powi(2);
    let l0 = mean_long.to_radians();
    let eq_time = 4.0 * (y * (2.0 * l0).sin()
        - 2.0 * eccentricity * mean_anomaly.sin()
        + 4.0 * eccentricity * y * mean_anomaly.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * eccentricity * eccentricity * (2.0 * mean_anomaly).sin()).to_degrees();

    let lat = lat.to_radians();
    let cos_ha = (SUNSET_ZENITH.to_radians().cos() - lat.sin() * declination.sin())
        / (lat.cos() * declination.cos());
    let hour_angle = cos_ha.clamp(-1.0, 1.0).acos().to_degrees();

    720.0 + 4.0 * hour_angle - 4.0 * long - eq_time
}

/// Julian day at 00:00 UT for the given date
///
/// # Arguments
///
/// * 'date' - the date
fn get_julian_day(date: NaiveDate) -> f64 {
    let (mut y, mut m) = (date.year(), date.month() as i32);
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let a = y / 100;
    let b = 2 - a + a / 4;

    (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor() + date.day() as f64 + b as f64 - 1524.5
}
