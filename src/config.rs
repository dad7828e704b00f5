use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OpenWeatherParameters {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OpenWeatherParameters {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Files {
    pub output_dir: String,
}

impl Default for Files {
    fn default() -> Self {
        Self { output_dir: ".".to_string() }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_console: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LevelFilter::Warn,
            log_to_console: true,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub open_weather: OpenWeatherParameters,
    pub files: Files,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items.
///
/// A missing file is only accepted when it is the default one, in which case built-in
/// defaults are used. The api key given in the environment, if any, overrides the one
/// in the file and the resulting key must not be empty.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
/// * 'env_api_key' - api key taken from the environment
pub fn load_config(config_path: &str, env_api_key: Option<String>) -> Result<Config, ConfigError> {
    let config = match fs::read_to_string(config_path) {
        Ok(toml) => toml::from_str(&toml)?,
        Err(e) if e.kind() == ErrorKind::NotFound && config_path == DEFAULT_CONFIG_FILE => Config::default(),
        Err(e) => return Err(ConfigError::Read(Path::new(config_path).to_path_buf(), e)),
    };

    with_api_key(config, env_api_key)
}

/// Applies an api key override and checks that a key is present
///
/// # Arguments
///
/// * 'config' - configuration as read from file
/// * 'api_key' - overriding api key
fn with_api_key(mut config: Config, api_key: Option<String>) -> Result<Config, ConfigError> {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.open_weather.api_key = key;
    }
    config.open_weather.api_key = config.open_weather.api_key.trim().to_string();

    if config.open_weather.api_key.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }

    Ok(config)
}
