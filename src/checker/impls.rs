// Standard library
use std::fmt;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

// Project imports
use crate::endpoints::types::RpcFamily;

// Current module imports
use super::constants::{
    COSMOS_STATUS_PATH, EVM_BLOCK_NUMBER_METHOD, JSONRPC_REQUEST_ID, JSONRPC_VERSION,
};
use super::errors::CheckError;
use super::functions::{cosmos_block_height, evm_block_number, fetch_json};
use super::models::{JsonRpcResponse, StatusResponse};
use super::traits::RpcChecker;
use super::types::{CheckOutcome, CheckResult, Checkers, CosmosChecker, EvmChecker};

impl EvmChecker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RpcChecker for EvmChecker {
    fn family(&self) -> RpcFamily {
        RpcFamily::Evm
    }

    async fn latest_block(&self, url: &str) -> Result<Option<u64>, CheckError> {
        let request = self.client.post(url).json(&json!({
            "jsonrpc": JSONRPC_VERSION,
            "method": EVM_BLOCK_NUMBER_METHOD,
            "params": [],
            "id": JSONRPC_REQUEST_ID,
        }));

        let response: JsonRpcResponse = fetch_json(request).await?;

        match (response.result, response.error) {
            (Some(result), _) => Ok(evm_block_number(&result)),
            (None, Some(error)) => Err(CheckError::Rpc(error)),
            (None, None) => Err(CheckError::MissingField("result")),
        }
    }
}

impl CosmosChecker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `<url>/status`, tolerating a trailing slash on `url`.
    pub fn status_url(url: &str) -> String {
        format!("{}{}", url.trim_end_matches('/'), COSMOS_STATUS_PATH)
    }
}

#[async_trait]
impl RpcChecker for CosmosChecker {
    fn family(&self) -> RpcFamily {
        RpcFamily::Cosmos
    }

    async fn latest_block(&self, url: &str) -> Result<Option<u64>, CheckError> {
        let request = self.client.get(Self::status_url(url));

        let response: StatusResponse = fetch_json(request).await?;

        let height: Value = response
            .result
            .ok_or(CheckError::MissingField("result"))?
            .sync_info
            .ok_or(CheckError::MissingField("result.sync_info"))?
            .latest_block_height
            .ok_or(CheckError::MissingField(
                "result.sync_info.latest_block_height",
            ))?;

        Ok(cosmos_block_height(&height))
    }
}

impl Checkers {
    pub fn new(client: Client) -> Self {
        Self {
            evm: EvmChecker::new(client.clone()),
            cosmos: CosmosChecker::new(client),
        }
    }

    pub fn for_family(&self, family: RpcFamily) -> &dyn RpcChecker {
        match family {
            RpcFamily::Evm => &self.evm,
            RpcFamily::Cosmos => &self.cosmos,
        }
    }
}

impl CheckResult {
    pub fn is_failing(&self) -> bool {
        matches!(self, CheckResult::Failing { .. })
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            CheckResult::Healthy {
                latest_block: Some(latest_block),
            } => write!(
                f,
                "{} RPC {} is healthy. Latest block: {}",
                self.family, self.url, latest_block
            ),
            CheckResult::Healthy { latest_block: None } => write!(
                f,
                "{} RPC {} is healthy. Latest block: unknown",
                self.family, self.url
            ),
            CheckResult::Failing { reason } => {
                write!(f, "{} RPC {} failed: {}", self.family, self.url, reason)
            }
        }
    }
}
