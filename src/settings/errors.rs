// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Endpoint list file path must not be empty")]
    EmptyEndpointsFile,
    #[error("Check timeout must be greater than 0 seconds")]
    InvalidTimeout,
    #[error("Report output path must not be empty")]
    EmptyReportOutput,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
    #[error("Configuration file path contains invalid UTF-8 characters")]
    NonUtf8Path,
    #[error("Failed to create default configuration file: {0}")]
    CreateDefault(#[from] std::io::Error),
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}
