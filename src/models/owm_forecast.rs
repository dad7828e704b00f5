use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct MainValues {
    pub temp: f64,
    pub humidity: u32,
}

#[derive(Deserialize, Debug)]
pub struct Condition {
    pub main: String,
}

/// Precipitation block, OpenWeather only includes the keys that carry any volume
#[derive(Deserialize, Debug, Default)]
pub struct Rain {
    #[serde(rename = "3h", default)]
    pub three_hours: f64,
}

#[derive(Deserialize, Debug)]
pub struct ForecastSample {
    pub dt: i64,
    pub main: MainValues,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub rain: Option<Rain>,
}

impl ForecastSample {
    /// Rain volume for the trailing three hours, zero when the sample has none
    ///
    pub fn rain_volume(&self) -> f64 {
        self.rain
            .as_ref()
            .map_or(0.0, |r| r.three_hours)
            .max(0.0)
    }

    /// Short weather label of the first reported condition
    ///
    pub fn condition(&self) -> &str {
        self.weather
            .first()
            .map_or("Unknown", |c| c.main.as_str())
    }
}

#[derive(Deserialize, Debug)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct FullForecast {
    #[serde(default)]
    pub list: Option<Vec<ForecastSample>>,
    #[serde(default)]
    pub city: Option<City>,
}

/// Body returned by OpenWeather on failed requests
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
