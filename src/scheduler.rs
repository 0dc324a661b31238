use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use crate::config::{GeoRef, Schedule};
use crate::manager_sun::get_sunset;

/// Returns the date after the current date at the location, regardless of the host timezone
///
/// # Arguments
///
/// * 'now' - the current instant
/// * 'tz' - timezone of the location
pub fn tomorrow(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    (now.with_timezone(&tz) + TimeDelta::days(1)).date_naive()
}

/// Calculates the next time an evaluation should run. If today's run time has already
/// passed, tomorrow's is returned.
///
/// # Arguments
///
/// * 'now' - the current time at the location
/// * 'schedule' - the configured schedule
/// * 'geo_ref' - location used for sunset based schedules
pub fn get_next_run_time(now: DateTime<Tz>, schedule: Schedule, geo_ref: &GeoRef) -> DateTime<Tz> {
    let today = now.date_naive();
    let run_time = |date: NaiveDate| -> DateTime<Tz> {
        match schedule {
            Schedule::Fixed { hour, minute } => {
                let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
                localize(now.timezone(), date.and_time(time))
            },
            Schedule::Sunset { advance_minutes } => {
                let sunset = get_sunset(date, geo_ref.lat, geo_ref.long, now.timezone());
                localize(now.timezone(), sunset) - TimeDelta::minutes(advance_minutes)
            },
        }
    };

    let next = run_time(today);
    if now > next {
        run_time(today + TimeDelta::days(1))
    } else {
        next
    }
}

/// Maps a local date time onto the timezone. Times skipped by a DST change are moved one
/// hour forward.
///
/// # Arguments
///
/// * 'tz' - the timezone
/// * 'local' - the local date time
fn localize(tz: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(local + TimeDelta::hours(1))).earliest())
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}
