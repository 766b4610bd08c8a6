// 3rd party crates
use reqwest::Client;

// Project imports
use crate::endpoints::types::RpcFamily;

/// Checks EVM JSON-RPC endpoints.
#[derive(Debug, Clone)]
pub struct EvmChecker {
    pub client: Client,
}

/// Checks Cosmos node REST endpoints.
#[derive(Debug, Clone)]
pub struct CosmosChecker {
    pub client: Client,
}

/// One checker per family, sharing a single HTTP client.
#[derive(Debug, Clone)]
pub struct Checkers {
    pub evm: EvmChecker,
    pub cosmos: CosmosChecker,
}

/// Classification of a single endpoint.
///
/// A healthy endpoint answered with the expected field present; the block
/// height is `None` when that field could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Healthy { latest_block: Option<u64> },
    Failing { reason: String },
}

/// The result of checking one endpoint, tagged with what was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub url: String,
    pub family: RpcFamily,
    pub result: CheckResult,
}
