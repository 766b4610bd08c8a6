// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Endpoints {
    /// Path of the JSON endpoint list
    #[serde(default = "default_endpoints_file")]
    pub file: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Check {
    /// Per-request timeout in seconds; `None` keeps the client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Upper bound on in-flight checks, 0 for unbounded
    #[serde(default)]
    pub max_concurrency: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Report {
    #[serde(default)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub check: Check,
    #[serde(default)]
    pub report: Report,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_endpoints_file() -> PathBuf {
    PathBuf::from("rpcLinks.json")
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            file: default_endpoints_file(),
        }
    }
}

/// Settings that have passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);

/// Loads the application settings and remembers where they came from.
pub struct ConfigManager {
    pub settings: Settings,
    pub config_path: PathBuf,
}
