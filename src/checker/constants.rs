/// JSON-RPC protocol version sent to EVM endpoints.
pub const JSONRPC_VERSION: &str = "2.0";

pub const EVM_BLOCK_NUMBER_METHOD: &str = "eth_blockNumber";

pub const JSONRPC_REQUEST_ID: u64 = 1;

/// Path appended to Cosmos endpoint URLs.
pub const COSMOS_STATUS_PATH: &str = "/status";

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
