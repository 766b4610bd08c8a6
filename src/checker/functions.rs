// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

// Project imports
use crate::endpoints::types::RpcFamily;

// Current module imports
use super::constants::USER_AGENT;
use super::errors::CheckError;
use super::traits::RpcChecker;
use super::types::{CheckOutcome, Checkers};

/// Builds the HTTP client shared by every check.
///
/// Without a timeout the client default applies.
pub fn create_reqwest_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// Sends `request` and decodes a successful JSON reply.
pub(super) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, CheckError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CheckError::Status(status));
    }

    let body: String = response.text().await?;
    trace!(response = %body, "Received RPC response");

    Ok(serde_json::from_str(&body)?)
}

/// Parses a JSON-RPC hex quantity such as `"0x10"`.
pub fn parse_hex_block_number(quantity: &str) -> Option<u64> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .unwrap_or(quantity);

    if digits.is_empty() {
        return None;
    }

    u64::from_str_radix(digits, 16).ok()
}

/// Parses a decimal block height such as `"100"`.
pub fn parse_block_height(height: &str) -> Option<u64> {
    height.trim().parse().ok()
}

/// Block number from an EVM `result`: a hex string, or a plain JSON number.
pub fn evm_block_number(result: &Value) -> Option<u64> {
    match result {
        Value::String(quantity) => parse_hex_block_number(quantity),
        Value::Number(number) => number.as_u64(),
        _ => None,
    }
}

/// Block height from a Cosmos `latest_block_height`: a decimal string or number.
pub fn cosmos_block_height(height: &Value) -> Option<u64> {
    match height {
        Value::String(height) => parse_block_height(height),
        Value::Number(number) => number.as_u64(),
        _ => None,
    }
}

/// Checks one endpoint with the checker for its family.
pub async fn check_endpoint(checkers: &Checkers, url: &str, family: RpcFamily) -> CheckOutcome {
    let checker: &dyn RpcChecker = checkers.for_family(family);
    checker.check(url).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_hex_quantities() {
        assert_eq!(parse_hex_block_number("0x10"), Some(16));
        assert_eq!(parse_hex_block_number("0x0"), Some(0));
        assert_eq!(parse_hex_block_number("0X12ab"), Some(0x12ab));
        assert_eq!(parse_hex_block_number("ff"), Some(255));
    }

    #[test]
    fn unparsable_hex_quantities_have_no_block_number() {
        for bad in ["", "0x", "0xzz", "latest", "0x1ffffffffffffffff"] {
            assert_eq!(parse_hex_block_number(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn parses_decimal_heights() {
        assert_eq!(parse_block_height("100"), Some(100));
        assert_eq!(parse_block_height(""), None);
        assert_eq!(parse_block_height("0x10"), None);
        assert_eq!(parse_block_height("-1"), None);
    }

    #[test]
    fn extracts_metrics_from_strings_and_numbers() {
        assert_eq!(evm_block_number(&json!("0x10")), Some(16));
        assert_eq!(evm_block_number(&json!(16)), Some(16));
        assert_eq!(evm_block_number(&json!({"n": 1})), None);
        assert_eq!(cosmos_block_height(&json!("100")), Some(100));
        assert_eq!(cosmos_block_height(&json!(100)), Some(100));
        assert_eq!(cosmos_block_height(&json!(true)), None);
    }

    #[test]
    fn builds_client_with_and_without_timeout() {
        assert!(create_reqwest_client(None).is_ok());
        assert!(create_reqwest_client(Some(Duration::from_secs(3))).is_ok());
    }
}
