// Standard library
use std::path::PathBuf;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to serialize failure report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write failure report to {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
