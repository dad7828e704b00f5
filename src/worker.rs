use std::fmt;
use std::path::{Path, PathBuf};
use chrono::TimeZone;
use log::{error, info};
use crate::errors::FarmcastError;
use crate::export::save_forecast;
use crate::manager_owm::ForecastSource;
use crate::report::build_report;

/// Runs fetch, report and export for one location and prints the forecast table.
/// Nothing is written to disk unless a report could be built.
///
/// # Arguments
///
/// * 'source' - where to get the forecast from
/// * 'location' - city or village name
/// * 'output_dir' - directory for the spreadsheet
/// * 'tz' - time zone used for dates in the report
pub fn run<S, Tz>(source: &S, location: &str, output_dir: &Path, tz: &Tz) -> Result<PathBuf, FarmcastError>
where
    S: ForecastSource,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let location = location.trim();
    if location.is_empty() {
        return Err(FarmcastError::EmptyLocation);
    }

    let forecast = source.get_forecast(location)?;
    let report = build_report(location, &forecast, tz)?;
    println!("{}", report);

    let file_path = save_forecast(&report, output_dir).map_err(|e| {
        error!("export failed: {}", e);
        e
    })?;
    println!("Weather data saved to {}", file_path.display());
    info!("forecast for '{}' done", location);

    Ok(file_path)
}
