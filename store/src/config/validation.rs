use super::ThemekitConfig;
use crate::validation::{StorageKeyValidator, Validator};

pub const MIN_POLL_INTERVAL_MS: u64 = 100;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid storage.key: {reason}")]
    StorageKey { reason: String },
    #[error("Invalid system.poll_interval_ms: {configured} (min: {min_limit})")]
    PollInterval { configured: u64, min_limit: u64 },
    #[error("Invalid responsive.scaling_factor: {configured}")]
    ScalingFactor { configured: f32 },
    #[error("Invalid logging.level: {configured}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::StorageKey { reason } => {
                format!(
                    "Storage key is not usable!\n\n\
                    {reason}\n\n\
                    Please update storage.key in themekit.toml."
                )
            }
            ConfigValidationError::PollInterval {
                configured,
                min_limit,
            } => {
                format!(
                    "System scheme polling too frequent!\n\n\
                    Your configured value: {configured} ms\n\
                    Minimum: {min_limit} ms\n\n\
                    Please update system.poll_interval_ms in themekit.toml."
                )
            }
            ConfigValidationError::ScalingFactor { configured } => {
                format!(
                    "Responsive scaling factor must be a positive number!\n\n\
                    Your configured value: {configured}\n\n\
                    Please update responsive.scaling_factor in themekit.toml."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level '{configured}'!\n\n\
                    Valid levels: {}\n\n\
                    Please update logging.level in themekit.toml.",
                    LOG_LEVELS.join(", ")
                )
            }
        }
    }
}

/// Validates a loaded [`ThemekitConfig`], reporting every problem found.
pub struct ConfigValidator;

impl Validator<ThemekitConfig> for ConfigValidator {
    type Error = Vec<ConfigValidationError>;

    fn validate(&self, input: &ThemekitConfig) -> Result<(), Self::Error> {
        let mut errors = Vec::new();

        if let Err(e) = StorageKeyValidator.validate(input.storage().key()) {
            errors.push(ConfigValidationError::StorageKey {
                reason: e.user_message(),
            });
        }

        let poll_interval = input.system().poll_interval_ms();
        if poll_interval < MIN_POLL_INTERVAL_MS {
            errors.push(ConfigValidationError::PollInterval {
                configured: poll_interval,
                min_limit: MIN_POLL_INTERVAL_MS,
            });
        }

        if let Some(factor) = input.responsive().scaling_factor() {
            if !(factor.is_finite() && factor > 0.0) {
                errors.push(ConfigValidationError::ScalingFactor { configured: factor });
            }
        }

        let level = input.logging().level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: input.logging().level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_text: &str) -> ThemekitConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_collects_all_errors() {
        let config = parse(
            r#"
            [storage]
            key = "../escape"
            [system]
            poll_interval_ms = 5
            [responsive]
            scaling_factor = 0.0
            [logging]
            level = "loud"
            "#,
        );

        let errors = ConfigValidator.validate(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(matches!(
            errors[1],
            ConfigValidationError::PollInterval { configured: 5, .. }
        ));
    }

    #[test]
    fn test_accepts_valid_values() {
        let config = parse(
            r#"
            [system]
            poll_interval_ms = 100
            [responsive]
            scaling_factor = 1.1
            [logging]
            level = "DEBUG"
            "#,
        );
        assert!(ConfigValidator.validate(&config).is_ok());
    }

    #[test]
    fn test_user_message_names_setting() {
        let error = ConfigValidationError::PollInterval {
            configured: 5,
            min_limit: MIN_POLL_INTERVAL_MS,
        };
        assert!(error.user_message().contains("system.poll_interval_ms"));
    }
}
