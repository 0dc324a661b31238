/// One day of weather forecast for the fixed location, as delivered by a forecast source.
/// Timestamps are kept as delivered and only parsed during signal extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub sunset_timestamp: Option<String>,
    pub hourly_series: Vec<HourlyCloud>,
}

/// Cloud cover percentages (0-100) for one forecast hour. The bands are modelled
/// independently so low + mid + high need not add up to total.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyCloud {
    pub timestamp: String,
    pub total: f64,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

/// Cloud cover for one hour inside the sunset observation window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudSample {
    pub hour: u32,
    pub total: f64,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}
