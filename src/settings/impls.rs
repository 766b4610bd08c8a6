// Standard library
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

// 3rd party crates
use config::{Config, Environment, File};
use tracing::info;

// Current module imports
use super::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_CONFIG, ENV_PREFIX,
};
use super::errors::{SettingsError, ValidationError};
use super::types::{ConfigManager, Settings, ValidatedSettings};

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_endpoints_file(&self) -> &Path {
        &self.endpoints.file
    }

    pub fn get_timeout(&self) -> Option<Duration> {
        self.check.timeout_secs.map(Duration::from_secs)
    }

    /// Concurrency cap for the fan-out, `None` when unbounded.
    pub fn get_max_concurrency(&self) -> Option<usize> {
        match self.check.max_concurrency {
            0 => None,
            n => Some(n),
        }
    }

    pub fn get_report_output(&self) -> Option<&Path> {
        self.report.output.as_deref()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        if self.endpoints.file.as_os_str().is_empty() {
            return Err(ValidationError::EmptyEndpointsFile);
        }

        if self.check.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }

        if let Some(output) = &self.report.output {
            if output.as_os_str().is_empty() {
                return Err(ValidationError::EmptyReportOutput);
            }
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    ///
    /// Errors are returned unlogged; `main` reports them.
    pub fn new() -> Result<Self, SettingsError> {
        let config_path: PathBuf = Self::get_config_path()?;
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings)?;

        Ok(ConfigManager {
            settings: validated_settings.into_inner(),
            config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, SettingsError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        } else {
            Err(SettingsError::NoConfigDir)
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), SettingsError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir)?;
            }
            fs::write(config_path, DEFAULT_CONFIG)?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    pub(crate) fn load_settings(config_path: &Path) -> Result<Settings, SettingsError> {
        let config_file: &str = config_path.to_str().ok_or(SettingsError::NonUtf8Path)?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_log_level(&self) -> String {
        self.settings.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn settings_from_toml(contents: &str) -> Settings {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        ConfigManager::load_settings(file.path()).unwrap()
    }

    #[test]
    fn default_config_parses_and_validates() {
        let settings = settings_from_toml(DEFAULT_CONFIG);

        assert_eq!(settings.get_log_level(), "info");
        assert_eq!(settings.get_endpoints_file(), Path::new("rpcLinks.json"));
        assert_eq!(settings.get_timeout(), None);
        assert_eq!(settings.get_max_concurrency(), None);
        assert_eq!(settings.get_report_output(), None);
        assert!(ValidatedSettings::new(settings).is_ok());
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let settings = settings_from_toml("");

        assert_eq!(settings.get_log_level(), "info");
        assert_eq!(settings.get_endpoints_file(), Path::new("rpcLinks.json"));
    }

    #[test]
    fn check_and_report_sections_are_read() {
        let settings = settings_from_toml(
            r#"
            [log]
            level = "DEBUG"
            [endpoints]
            file = "/etc/rpcs.json"
            [check]
            timeout_secs = 7
            max_concurrency = 16
            [report]
            output = "out.json"
            "#,
        );

        assert_eq!(settings.get_log_level(), "debug");
        assert_eq!(settings.get_endpoints_file(), Path::new("/etc/rpcs.json"));
        assert_eq!(settings.get_timeout(), Some(Duration::from_secs(7)));
        assert_eq!(settings.get_max_concurrency(), Some(16));
        assert_eq!(settings.get_report_output(), Some(Path::new("out.json")));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.log.level = "verbose".to_string();

        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidLogLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.check.timeout_secs = Some(0);

        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn rejects_empty_paths() {
        let mut settings = Settings::default();
        settings.endpoints.file = PathBuf::new();
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::EmptyEndpointsFile)
        ));

        let mut settings = Settings::default();
        settings.report.output = Some(PathBuf::new());
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::EmptyReportOutput)
        ));
    }

    #[test]
    fn writes_default_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        ConfigManager::ensure_config_file_exists(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
