//! Logger initialization and the logging macros used across the workspace.
//!
//! Output goes to a colored console appender and, when a log directory is provided,
//! to a rolling log file plus a separate file collecting warnings and errors.

mod appender;
mod logger;

use appender::AppenderSpec;
use log::LevelFilter;
use log4rs::config::{Config, Root};
use logger::Builder;

pub use logger::LogError;

pub const DEFAULT_LOGGER_ENV: &str = "RUST_LOG";

pub const LOG_FILE_NAME: &str = "archival-walker.log";
pub const ERR_LOG_FILE_NAME: &str = "archival-walker_err.log";

const CONSOLE_APPENDER: &str = "stdout";
const LOG_FILE_APPENDER: &str = "log_file";
const ERR_LOG_FILE_APPENDER: &str = "err_log_file";

/// Installs the global logger.
///
/// `filters` is an expression like `info,kaspa_archival_traversal=debug`; directives found
/// in the `RUST_LOG` environment variable are applied first and overridden by `filters`.
pub fn init_logger(log_dir: Option<&str>, filters: &str) -> Result<(), LogError> {
    let mut specs = vec![AppenderSpec::console(CONSOLE_APPENDER, None)];
    if let Some(log_dir) = log_dir {
        specs.push(AppenderSpec::roller(LOG_FILE_APPENDER, None, log_dir, LOG_FILE_NAME)?);
        specs.push(AppenderSpec::roller(ERR_LOG_FILE_APPENDER, Some(LevelFilter::Warn), log_dir, ERR_LOG_FILE_NAME)?);
    }

    let loggers = Builder::new().root_level(LevelFilter::Info).parse_env(DEFAULT_LOGGER_ENV).parse_expression(filters).build();
    let names = specs.iter().map(|x| x.name).collect::<Vec<_>>();

    let config = Config::builder()
        .appenders(specs.iter_mut().filter_map(|x| x.appender()))
        .loggers(loggers.items())
        .build(Root::builder().appenders(names).build(loggers.root_level()))
        .map_err(|err| LogError::Config(err.to_string()))?;

    log4rs::init_config(config).map_err(|err| LogError::Config(err.to_string()))?;
    Ok(())
}

#[macro_export]
macro_rules! trace {
    ($($t:tt)*) => (
        log::trace!($($t)*)
    )
}

#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => (
        log::debug!($($t)*)
    )
}

#[macro_export]
macro_rules! info {
    ($($t:tt)*) => (
        log::info!($($t)*)
    )
}

#[macro_export]
macro_rules! warn {
    ($($t:tt)*) => (
        log::warn!($($t)*)
    )
}

#[macro_export]
macro_rules! error {
    ($($t:tt)*) => (
        log::error!($($t)*)
    )
}
