//! Endpoint list loading.
//!
//! The endpoint list is a JSON object with one array of URLs per RPC family:
//!
//! ```json
//! { "evm": ["https://..."], "cosmos": ["https://..."] }
//! ```
//!
//! Both keys are required. A missing or malformed file is fatal for the run;
//! no default list is substituted.

pub mod errors;
pub mod functions;
pub mod types;
