use std::fmt;
use chrono::{DateTime, TimeZone};
use log::{debug, info};
use crate::advice::{classify, FarmingAdvice};
use crate::errors::ReportError;
use crate::models::owm_forecast::FullForecast;

/// OpenWeather reports every third hour, i.e. 8 samples per day
const SAMPLES_PER_DAY: usize = 8;
const SEPARATOR_LEN: usize = 115;

/// One reading per day with its farming advice
#[derive(Clone, Debug, PartialEq)]
pub struct DailyRecord {
    pub date: String,
    pub temperature: f64,
    pub humidity: u32,
    pub weather: String,
    pub rain_volume: f64,
    pub farming_advice: FarmingAdvice,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for DailyRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rain = if self.rain_volume == 0.0 { "0".to_string() } else { decimal(self.rain_volume) };
        write!(f, "{:<15} {:<12} {:<15} {:<20} {:<15} {:<25}",
               self.date, decimal(self.temperature), self.humidity,
               self.weather, rain, self.farming_advice)
    }
}

/// Formats a measured value so that whole numbers keep one decimal, e.g. 10.0 and 10.25
///
/// # Arguments
///
/// * 'value' - the value to format
fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Daily records for one location, in chronological order.
/// `location` is the requested name, `title` the place OpenWeather resolved it to.
#[derive(Debug)]
pub struct ForecastReport {
    pub location: String,
    pub title: String,
    pub records: Vec<DailyRecord>,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n5-Day Farming Weather Forecast for {}:\n\n", self.title)?;
        write!(f, "{:<15} {:<12} {:<15} {:<20} {:<15} {:<25}\n",
               "Date", "Temp (°C)", "Humidity (%)", "Weather", "Rain (mm/3h)", "Farming Advice")?;
        write!(f, "{:-<1$}\n", "", SEPARATOR_LEN)?;
        for r in &self.records {
            write!(f, "{}\n", r)?;
        }
        write!(f, "{:-<1$}", "", SEPARATOR_LEN)
    }
}

/// Builds the daily report from a forecast document.
///
/// The first sample of every day (index 0, 8, 16...) represents that day, and its date is
/// taken in the given time zone.
///
/// # Arguments
///
/// * 'location' - the location the forecast was requested for
/// * 'forecast' - the forecast document from OpenWeather
/// * 'tz' - time zone used when deriving calendar dates
pub fn build_report<Tz: TimeZone>(location: &str, forecast: &FullForecast, tz: &Tz) -> Result<ForecastReport, ReportError>
where
    Tz::Offset: fmt::Display,
{
    let samples = forecast.list.as_ref().ok_or(ReportError::NoData)?;

    let location = location.trim();
    let title = match &forecast.city {
        Some(city) if !city.name.trim().is_empty() => match &city.country {
            Some(country) if !country.is_empty() => format!("{}, {}", city.name, country),
            _ => city.name.clone(),
        },
        _ => location.to_string(),
    };
    debug!("forecast for '{}' resolved to {}", location, title);

    let mut records: Vec<DailyRecord> = Vec::with_capacity(samples.len() / SAMPLES_PER_DAY + 1);
    for sample in samples.iter().step_by(SAMPLES_PER_DAY) {
        let date = DateTime::from_timestamp(sample.dt, 0)
            .ok_or(ReportError::InvalidTimestamp(sample.dt))?
            .with_timezone(tz);

        let rain_volume = sample.rain_volume();
        records.push(DailyRecord {
            date: date.format("%Y-%m-%d").to_string(),
            temperature: sample.main.temp,
            humidity: sample.main.humidity,
            weather: sample.condition().to_string(),
            rain_volume,
            farming_advice: classify(sample.main.temp, rain_volume),
        });
    }

    info!("{} daily records out of {} samples", records.len(), samples.len());

    Ok(ForecastReport { location: location.to_string(), title, records })
}
