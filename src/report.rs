use std::fmt;
use std::fmt::Formatter;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use crate::extraction::SUNSET_WINDOW;
use crate::sources::PollutantLevel;
use crate::tier::Tier;

/// Local sunset time, either from the forecast or calculated for the location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sunset {
    pub time: NaiveDateTime,
    pub calculated: bool,
}

impl Sunset {
    /// True if the sun sets outside the fixed observation window
    pub fn outside_window(&self) -> bool {
        !SUNSET_WINDOW.contains(&self.time.hour())
    }
}

/// Outcome of one afterglow evaluation, ready for presentation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub date: NaiveDate,
    pub score: f64,
    pub tier: Tier,
    pub pollutant: PollutantLevel,
    pub sunset: Sunset,
    pub forecast_available: bool,
    pub sample_count: usize,
}

impl Report {
    /// Score rounded to two decimals for display
    pub fn rounded_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Report {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let caption = format!("Afterglow forecast for {} ", self.date.format("%Y-%m-%d"));
        writeln!(f, "{:=<72}", caption)?;
        if !self.forecast_available {
            writeln!(f, "Weather forecast unavailable, score defaults to 0")?;
        }

        let origin = if self.sunset.calculated { " (calculated)" } else { "" };
        writeln!(f, "Sunset:           {}{}", self.sunset.time.format("%H:%M"), origin)?;
        if self.sunset.outside_window() {
            writeln!(f, "Sunset falls outside the {}-{} observation window",
                     SUNSET_WINDOW[0], SUNSET_WINDOW[SUNSET_WINDOW.len() - 1])?;
        }
        if self.forecast_available {
            writeln!(f, "Hours scored:     {}", self.sample_count)?;
        }

        writeln!(f, "Vividness score:  {:.2}", self.rounded_score())?;
        writeln!(f, "Tier:             {}", self.tier)?;
        write!(f, "PM2.5 (reference): {}", self.pollutant)
    }
}
