use std::env;
use std::io::{self, Write};
use std::path::Path;
use anyhow::{Context, Result};
use chrono::Local;
use log::error;
use crate::config::{load_config, DEFAULT_CONFIG_FILE};
use crate::logging::setup_logger;
use crate::manager_owm::OpenWeather;

mod advice;
mod config;
mod errors;
mod export;
mod logging;
mod manager_owm;
mod models;
mod report;
mod worker;

fn main() {
    let config_path = env::var("FARMCAST_CONFIG").unwrap_or(DEFAULT_CONFIG_FILE.to_string());
    let config = match load_config(&config_path, env::var("OPENWEATHER_API_KEY").ok()) {
        Ok(c) => c,
        Err(e) => { println!("Error loading configuration: {}", e); return; }
    };

    if let Err(e) = setup_logger(&config.general) {
        println!("Error setting up logging: {}", e);
        return;
    }

    let owm = match OpenWeather::new(&config.open_weather) {
        Ok(o) => o,
        Err(e) => { error!("{}", e); println!("Error: {}", e); return; }
    };

    let location = match prompt_location() {
        Ok(l) => l,
        Err(e) => { error!("{:#}", e); println!("Error: {:#}", e); return; }
    };

    if let Err(e) = worker::run(&owm, &location, Path::new(&config.files.output_dir), &Local) {
        error!("{}", e);
        println!("{}", e);
    }
}

/// Asks the user for a location and reads one line from stdin
///
fn prompt_location() -> Result<String> {
    print!("Enter a city or village name: ");
    io::stdout().flush().context("unable to write prompt")?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).context("unable to read location from stdin")?;

    Ok(line.trim().to_string())
}
