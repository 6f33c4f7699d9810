//! Logging Infrastructure
//!
//! The terminal UI owns stdout, so events go to the in-app activity pane
//! (tui-logger) and, when `LOG_DIR` points at an existing directory, to a
//! daily rolling file.

use crate::core::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// File name prefix for rolling log files
const LOG_FILE_PREFIX: &str = "storefront";

/// Initialize the logger from config
pub fn init_logger(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = log_dir.filter(|dir| dir.exists()).map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .boxed()
    });

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .try_init();

    // Also init log crate adapter in case dependencies use the log crate
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {}", e);
    }
}
