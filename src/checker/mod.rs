//! Single-endpoint health checks.
//!
//! Each RPC family has its own [`RpcChecker`](traits::RpcChecker)
//! implementation that issues exactly one request and extracts the latest
//! block height from the reply:
//!
//! - EVM: `POST <url>` with an `eth_blockNumber` JSON-RPC call, healthy when
//!   the reply carries a hex `result`.
//! - Cosmos: `GET <url>/status`, healthy when the reply carries
//!   `result.sync_info.latest_block_height`.
//!
//! Any transport error, non-success status, undecodable body or missing
//! field classifies the endpoint as failing. The failure reason is kept as
//! text for reporting only.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod models;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
