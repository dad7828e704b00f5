use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Builds the log4rs configuration given the general settings.
/// Console output goes to stderr so it never mixes with the forecast table on stdout.
///
/// # Arguments
///
/// * 'general' - general section of the configuration
fn logger_config(general: &General) -> Result<Config, LoggingError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if general.log_to_console {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }

    if let Some(path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)
            .map_err(|e| LoggingError::LogFile(path.clone(), e))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

/// Sets up logging
///
/// # Arguments
///
/// * 'general' - general section of the configuration
pub fn setup_logger(general: &General) -> Result<(), LoggingError> {
    let config = logger_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}
