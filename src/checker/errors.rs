// 3rd party crates
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Why a single endpoint check failed.
///
/// Only ever rendered for the operator; callers do not branch on the variant.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request failed with status code {0}")]
    Status(StatusCode),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid response: missing `{0}`")]
    MissingField(&'static str),

    #[error("JSON-RPC error: {0}")]
    Rpc(Value),
}
