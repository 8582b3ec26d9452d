use crate::error::{ThemeError, ThemeResult};
use crate::storage::{DEFAULT_STORAGE_KEY, FileStorage, PersistConfig};
use crate::system::{DEFAULT_POLL_INTERVAL, OsSchemeProvider};
use crate::validation::Validator;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokens::{Responsive, ResponsiveConfig, ScreenMetrics, responsive::ResponsiveOverrides};

pub mod validation;

pub use validation::{ConfigValidationError, ConfigValidator};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "themekit.toml";

/// Prefix of environment overrides, e.g. `THEMEKIT__STORAGE__KEY`.
pub const ENV_PREFIX: &str = "THEMEKIT";

/// Application configuration. Every field is optional; accessors apply
/// defaults.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemekitConfig {
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    system: SystemConfig,
    #[serde(default)]
    responsive: ResponsiveSettings,
    #[serde(default)]
    logging: LoggingConfig,
}

impl ThemekitConfig {
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn system(&self) -> &SystemConfig {
        &self.system
    }

    pub fn responsive(&self) -> &ResponsiveSettings {
        &self.responsive
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validates and collects every problem rather than stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        ConfigValidator.validate(self)
    }

    /// Persistence backed by files under the configured (or default) directory.
    pub fn persist_config(&self) -> ThemeResult<PersistConfig> {
        let storage = match self.storage.dir() {
            Some(dir) => FileStorage::new(dir),
            None => FileStorage::default_location()?,
        };
        Ok(PersistConfig::new(self.storage.key(), Arc::new(storage)))
    }

    pub fn scheme_provider(&self) -> OsSchemeProvider {
        OsSchemeProvider::new(self.system.poll_interval())
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StorageConfig {
    key: Option<String>,
    dir: Option<String>,
}

impl StorageConfig {
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn dir(&self) -> Option<PathBuf> {
        self.dir.as_deref().map(PathBuf::from)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SystemConfig {
    poll_interval_ms: Option<u64>,
}

impl SystemConfig {
    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL.as_millis() as u64)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms())
    }
}

/// Responsive tuning plus optional screen metrics for theme composition.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ResponsiveSettings {
    tablet_breakpoint: Option<u32>,
    scaling_factor: Option<f32>,
    screen_width: Option<u32>,
    screen_height: Option<u32>,
}

impl ResponsiveSettings {
    pub fn tablet_breakpoint(&self) -> Option<u32> {
        self.tablet_breakpoint
    }

    pub fn scaling_factor(&self) -> Option<f32> {
        self.scaling_factor
    }

    pub fn config(&self) -> ResponsiveConfig {
        ResponsiveConfig::configure(&ResponsiveOverrides {
            tablet_breakpoint: self.tablet_breakpoint,
            scaling_factor: self.scaling_factor,
        })
    }

    /// Responsive helpers when a screen width is configured.
    pub fn responsive(&self) -> Option<Responsive> {
        let width = self.screen_width?;
        Some(Responsive::new(
            self.config(),
            ScreenMetrics {
                width,
                height: self.screen_height.unwrap_or_default(),
            },
        ))
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// Loads configuration from a TOML file and `THEMEKIT__*` environment
/// variables, then validates it.
///
/// With `path = None` the default file is optional; an explicit path must
/// exist.
pub fn load_config(path: Option<&Path>) -> ThemeResult<ThemekitConfig> {
    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);

    let config = Config::builder()
        .add_source(file_source)
        .add_source(env_source)
        .build()
        .map_err(|e| {
            ThemeError::Config(format!(
                "Configuration loading failed: {e}. Please check your themekit.toml file and environment variables."
            ))
        })?;

    let themekit_config: ThemekitConfig = config
        .try_deserialize()
        .map_err(|e| ThemeError::Config(format!("Failed to deserialize config: {e}")))?;

    if let Err(errors) = themekit_config.validate() {
        let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
        return Err(ThemeError::Config(format!(
            "Configuration validation failed:\n{}",
            messages.join("\n\n")
        )));
    }

    log::debug!("Configuration loaded: {themekit_config:?}");
    Ok(themekit_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ThemekitConfig::default();
        assert_eq!(config.storage().key(), "theme-store");
        assert_eq!(config.storage().dir(), None);
        assert_eq!(config.system().poll_interval_ms(), 2000);
        assert_eq!(config.logging().level(), "info");
        assert!(config.responsive().responsive().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            [storage]
            key = "my-app.theme"
            dir = "/tmp/themekit-test"

            [system]
            poll_interval_ms = 500

            [responsive]
            tablet_breakpoint = 600
            scaling_factor = 1.5
            screen_width = 800

            [logging]
            level = "debug"
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.storage().key(), "my-app.theme");
        assert_eq!(
            config.storage().dir(),
            Some(PathBuf::from("/tmp/themekit-test"))
        );
        assert_eq!(config.system().poll_interval(), Duration::from_millis(500));
        assert_eq!(config.logging().level(), "debug");

        let responsive = config.responsive().responsive().unwrap();
        assert!(responsive.is_tablet());
        assert_eq!(responsive.font_size(10), 15);
    }

    #[test]
    fn test_invalid_file_values_rejected() {
        let file = write_config(
            r#"
            [system]
            poll_interval_ms = 10
            "#,
        );

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = load_config(Some(Path::new("/nonexistent/themekit.toml")));
        assert!(matches!(result, Err(ThemeError::Config(_))));
    }

    #[test]
    fn test_mistyped_value_reports_deserialize_failure() {
        let file = write_config(
            r#"
            [system]
            poll_interval_ms = "often"
            "#,
        );

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        assert!(err.to_string().contains("Failed to deserialize config"));
    }
}
