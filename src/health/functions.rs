// Standard library
use std::path::Path;

// 3rd party crates
use futures::stream::{self, BoxStream, FuturesUnordered};
use futures::StreamExt;
use tracing::{debug, info};

// Project imports
use crate::checker::functions::check_endpoint;
use crate::checker::types::{CheckOutcome, Checkers};
use crate::endpoints::types::EndpointList;

// Current module imports
use super::errors::ReportError;
use super::types::FailureReport;

/// Starts a check for every endpoint and yields outcomes as they complete.
///
/// With no limit every check is in flight at once; otherwise at most
/// `max_concurrency` are. Either way every check runs to completion.
fn dispatch<'a>(
    checkers: &'a Checkers,
    endpoints: &'a EndpointList,
    max_concurrency: Option<usize>,
) -> BoxStream<'a, CheckOutcome> {
    match max_concurrency {
        Some(limit) => stream::iter(endpoints.tagged())
            .map(move |(url, family)| check_endpoint(checkers, url, family))
            .buffer_unordered(limit.max(1))
            .boxed(),
        None => {
            // Create a FuturesUnordered to hold our concurrent checks.
            let futures = FuturesUnordered::new();
            for (url, family) in endpoints.tagged() {
                futures.push(check_endpoint(checkers, url, family));
            }
            futures.boxed()
        }
    }
}

/// Checks every endpoint concurrently and collects the failing ones.
///
/// Each outcome line is printed as its check completes. A failing endpoint
/// never stops the others from being checked.
pub async fn run_health_check(
    checkers: &Checkers,
    endpoints: &EndpointList,
    max_concurrency: Option<usize>,
) -> FailureReport {
    info!(
        evm = endpoints.evm.len(),
        cosmos = endpoints.cosmos.len(),
        "Checking RPCs in parallel"
    );
    if let Some(limit) = max_concurrency {
        debug!("At most {} checks in flight", limit);
    }

    let mut report = FailureReport::default();
    let mut outcomes = dispatch(checkers, endpoints, max_concurrency);

    // Collect all results, processing them as they complete.
    while let Some(outcome) = outcomes.next().await {
        println!("{}", outcome);
        report.record(&outcome);
    }

    info!(
        failing_evm = report.evm.len(),
        failing_cosmos = report.cosmos.len(),
        "All RPC checks finished"
    );

    report
}

/// Writes the report as pretty-printed JSON.
pub async fn write_report(report: &FailureReport, path: &Path) -> Result<(), ReportError> {
    let json: String = serde_json::to_string_pretty(report)?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!(path = ?path, "Failure report written");
    Ok(())
}
