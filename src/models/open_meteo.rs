use serde::Deserialize;

#[derive(Deserialize)]
pub struct HourlyColumns {
    pub time: Vec<String>,
    pub cloudcover: Vec<f64>,
    pub cloudcover_low: Vec<f64>,
    pub cloudcover_mid: Vec<f64>,
    pub cloudcover_high: Vec<f64>,
}

#[derive(Deserialize)]
pub struct DailyColumns {
    pub sunset: Vec<String>,
}

#[derive(Deserialize)]
pub struct OpenMeteoForecast {
    pub timezone: Option<String>,
    pub hourly: HourlyColumns,
    pub daily: DailyColumns,
}
