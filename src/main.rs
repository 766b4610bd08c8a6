// 3rd party crates
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod checker;
mod endpoints;
mod errors;
mod functions;
mod health;
mod settings;

// Project imports
use crate::functions::run;
use crate::settings::types::ConfigManager;

/// Crates whose own logging is only interesting when it is an error.
const QUIET_CRATES: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

/// Main entry point for the RPC health checker.
/// Probes every configured EVM and Cosmos endpoint once, concurrently,
/// and reports which of them are unreachable or answering invalid responses.
///
/// Features:
/// - EVM JSON-RPC checks via `eth_blockNumber`
/// - Cosmos node checks via `/status`
/// - Full or bounded concurrent fan-out
/// - Per-endpoint result lines and a final summary
/// - Optional JSON failure report
#[tokio::main]
async fn main() {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let config: ConfigManager = match ConfigManager::new() {
        Ok(config) => config,
        Err(e) => {
            init_logging("error");
            error!("Failed to initialize configuration: {}", e);
            return;
        }
    };

    init_logging(&config.get_log_level());
    info!(
        "⚙️ Settings have been loaded from {:?}.",
        config.config_path
    );

    if let Err(e) = run(config.get_settings()).await {
        error!("Error during the RPC health check process: {}", e);
    }
}

/// Installs the global subscriber. Logs go to stderr so the summary on
/// stdout stays clean.
fn init_logging(level: &str) {
    let directives: String = std::iter::once(level.to_string())
        .chain(QUIET_CRATES.iter().map(|name| format!("{}=error", name)))
        .collect::<Vec<_>>()
        .join(",");

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
