// 3rd party crates
use tracing::{info, warn};

// Project imports
use crate::checker::functions::create_reqwest_client;
use crate::checker::types::Checkers;
use crate::endpoints::functions::load_endpoints;
use crate::endpoints::types::EndpointList;
use crate::errors::AppError;
use crate::health::functions::{run_health_check, write_report};
use crate::health::types::FailureReport;
use crate::settings::types::Settings;

/// Runs one health check pass.
///
/// This function:
/// - Loads the endpoint list, aborting if it cannot be read or parsed
/// - Checks every endpoint concurrently, exactly once
/// - Prints the summary of failing endpoints
/// - Optionally writes the failure report as JSON
pub async fn run(settings: &Settings) -> Result<FailureReport, AppError> {
    let endpoints: EndpointList = load_endpoints(settings.get_endpoints_file()).await?;
    info!(
        "📋 Loaded {} RPC endpoints from {:?}",
        endpoints.len(),
        settings.get_endpoints_file()
    );
    if endpoints.is_empty() {
        warn!("Endpoint list is empty, nothing to check");
    }

    let checkers = Checkers::new(create_reqwest_client(settings.get_timeout())?);

    let report: FailureReport =
        run_health_check(&checkers, &endpoints, settings.get_max_concurrency()).await;

    println!("\n{}", report);
    if report.is_empty() {
        info!("✅ All RPCs are healthy");
    }

    if let Some(path) = settings.get_report_output() {
        write_report(&report, path).await?;
    }

    Ok(report)
}
