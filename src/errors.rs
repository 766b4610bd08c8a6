// 3rd party crates
use thiserror::Error;

// Project imports
use crate::endpoints::errors::EndpointLoadError;
use crate::health::errors::ReportError;

/// Errors that abort a health check run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EndpointLoad(#[from] EndpointLoadError),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("{0}")]
    Report(#[from] ReportError),
}
