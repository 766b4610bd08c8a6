// 3rd party crates
use async_trait::async_trait;
use tracing::debug;

// Project imports
use crate::endpoints::types::RpcFamily;

// Current module imports
use super::errors::CheckError;
use super::types::{CheckOutcome, CheckResult};

/// A health check for one RPC family.
///
/// Implementors issue exactly one request per call and never retry.
#[async_trait]
pub trait RpcChecker: Send + Sync {
    /// The family this checker speaks.
    fn family(&self) -> RpcFamily;

    /// Queries `url` and returns its latest block height.
    ///
    /// `Ok(None)` means the endpoint answered with the field present but its
    /// value is not a readable block number.
    async fn latest_block(&self, url: &str) -> Result<Option<u64>, CheckError>;

    /// Checks `url` and classifies it as healthy or failing.
    ///
    /// Errors never escape; they become [`CheckResult::Failing`].
    async fn check(&self, url: &str) -> CheckOutcome {
        let family = self.family();
        debug!(url = %url, family = %family, "Checking RPC");

        let result = match self.latest_block(url).await {
            Ok(latest_block) => {
                debug!(url = %url, family = %family, latest_block = ?latest_block, "RPC is healthy");
                CheckResult::Healthy { latest_block }
            }
            Err(e) => {
                debug!(url = %url, family = %family, error = %e, "RPC check failed");
                CheckResult::Failing {
                    reason: e.to_string(),
                }
            }
        };

        CheckOutcome {
            url: url.to_string(),
            family,
            result,
        }
    }
}
