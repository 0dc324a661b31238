use serde::Deserialize;

#[derive(Deserialize)]
pub struct Measurement {
    pub parameter: Option<String>,
    pub value: f64,
    pub unit: Option<String>,
}

#[derive(Deserialize)]
pub struct LatestResult {
    pub location: Option<String>,
    pub measurements: Vec<Measurement>,
}

#[derive(Deserialize)]
pub struct Latest {
    pub results: Vec<LatestResult>,
}
