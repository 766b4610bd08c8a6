// Standard library
use std::path::Path;

// 3rd party crates
use tracing::debug;

// Current module imports
use super::errors::EndpointLoadError;
use super::types::EndpointList;

/// Reads and parses the endpoint list from `path`.
///
/// Failures are returned, not logged; the caller reports them once.
pub async fn load_endpoints(path: &Path) -> Result<EndpointList, EndpointLoadError> {
    let contents: String =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| EndpointLoadError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;

    let endpoints: EndpointList =
        serde_json::from_str(&contents).map_err(|e| EndpointLoadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!(
        evm = endpoints.evm.len(),
        cosmos = endpoints.cosmos.len(),
        "Loaded endpoint list"
    );

    Ok(endpoints)
}
