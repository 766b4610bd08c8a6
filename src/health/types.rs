// 3rd party crates
use serde::Serialize;

/// Endpoints that failed their check, per family, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub evm: Vec<String>,
    pub cosmos: Vec<String>,
}
