//! Fan-out over every configured endpoint and aggregation of failures.

pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;
