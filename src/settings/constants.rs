/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "RPCHC_CONFIG_PATH";

/// Prefix for environment overrides, e.g. `RPCHC__CHECK__TIMEOUT_SECS=5`.
pub const ENV_PREFIX: &str = "RPCHC";

/// Directory created under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "rpc-health-check";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Where the endpoint list lives.
# Relative paths resolve against the working directory.
[endpoints]
file = "rpcLinks.json"

[check]
# Per-request timeout in seconds. Leave unset to use the HTTP client default.
# timeout_secs = 10

# Maximum number of checks in flight at once. 0 means no limit.
max_concurrency = 0

[report]
# Optional: also write the failing endpoints as JSON to this file.
# output = "failing-rpcs.json"
"#;
