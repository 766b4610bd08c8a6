// 3rd party crates
use serde::Deserialize;
use serde_json::Value;

/// Reply to an `eth_blockNumber` call.
///
/// Fields are kept as raw values: only their presence decides health.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    pub result: Option<Value>,
    pub error: Option<Value>,
}

/// Reply to a Cosmos `/status` request.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub result: Option<StatusResult>,
}

#[derive(Debug, Deserialize)]
pub struct StatusResult {
    pub sync_info: Option<SyncInfo>,
}

#[derive(Debug, Deserialize)]
pub struct SyncInfo {
    /// Usually a decimal string such as `"19834512"`
    pub latest_block_height: Option<Value>,
}
