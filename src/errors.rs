use std::path::PathBuf;
use thiserror::Error;
use crate::manager_owm::OWMError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read config file '{0}': {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("config file parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no OpenWeather API key, set OPENWEATHER_API_KEY or open_weather.api_key")]
    MissingApiKey,
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("unable to open log file '{0}': {1}")]
    LogFile(String, #[source] std::io::Error),
    #[error("invalid logger configuration: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("logger already initialized: {0}")]
    Init(#[from] log::SetLoggerError),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Weather data not found. Please check the location name and API key.")]
    NoData,
    #[error("forecast sample has an invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unable to write spreadsheet '{0}': {1}")]
    Xlsx(PathBuf, #[source] rust_xlsxwriter::XlsxError),
    #[error("spreadsheet error: {0}")]
    Sheet(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Error, Debug)]
pub enum FarmcastError {
    #[error("location name must not be empty")]
    EmptyLocation,
    #[error(transparent)]
    Forecast(#[from] OWMError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
