use std::path::{Path, PathBuf};
use log::info;
use rust_xlsxwriter::{Format, Workbook};
use crate::errors::ExportError;
use crate::report::ForecastReport;

pub const COLUMNS: [&str; 6] = [
    "Date",
    "Temperature (°C)",
    "Humidity (%)",
    "Weather",
    "Rain (mm/3h)",
    "Farming Advice",
];

/// Returns the spreadsheet file name for a location, with characters that are not safe
/// in file names replaced by underscore
///
/// # Arguments
///
/// * 'location' - the location as given by the user
pub fn file_name(location: &str) -> String {
    let safe: String = location
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    format!("{}_weather_forecast.xlsx", safe)
}

/// Saves the report as a spreadsheet with one header row and one row per daily record.
/// Any existing file with the same name is overwritten.
///
/// # Arguments
///
/// * 'report' - the report to save
/// * 'output_dir' - the directory to save the file to
pub fn save_forecast(report: &ForecastReport, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let file_path = output_dir.join(file_name(&report.location));

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, caption) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *caption, &bold)?;
    }

    for (i, r) in report.records.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &r.date)?;
        worksheet.write_number(row, 1, r.temperature)?;
        worksheet.write_number(row, 2, r.humidity as f64)?;
        worksheet.write_string(row, 3, &r.weather)?;
        worksheet.write_number(row, 4, r.rain_volume)?;
        worksheet.write_string(row, 5, r.farming_advice.label())?;
    }

    workbook
        .save(&file_path)
        .map_err(|e| ExportError::Xlsx(file_path.clone(), e))?;

    info!("saved {} records to {}", report.records.len(), file_path.display());

    Ok(file_path)
}
