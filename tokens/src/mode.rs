use crate::error::ParseTokenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Concrete theme variant in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Normalizes an opaque system color-scheme value.
    ///
    /// Anything other than `"light"` or `"dark"`, including no value at all,
    /// maps to [`ThemeMode::Light`].
    pub fn from_scheme(scheme: Option<&str>) -> ThemeMode {
        scheme
            .and_then(|s| s.parse().ok())
            .unwrap_or(ThemeMode::Light)
    }
}

/// Returns true when `scheme` names a concrete mode.
pub fn is_valid_scheme(scheme: &str) -> bool {
    scheme.parse::<ThemeMode>().is_ok()
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ParseTokenError::new("theme mode", s)),
        }
    }
}

/// The user's stored intent: a concrete mode, or follow the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeModeConfig {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeModeConfig {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeModeConfig::Light => "light",
            ThemeModeConfig::Dark => "dark",
            ThemeModeConfig::System => "system",
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, ThemeModeConfig::System)
    }

    /// Resolves to a concrete mode, querying `system` only for `System`.
    pub fn resolve<F>(self, system: F) -> ThemeMode
    where
        F: FnOnce() -> ThemeMode,
    {
        match self {
            ThemeModeConfig::Light => ThemeMode::Light,
            ThemeModeConfig::Dark => ThemeMode::Dark,
            ThemeModeConfig::System => system(),
        }
    }
}

impl From<ThemeMode> for ThemeModeConfig {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => ThemeModeConfig::Light,
            ThemeMode::Dark => ThemeModeConfig::Dark,
        }
    }
}

impl fmt::Display for ThemeModeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeModeConfig {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeModeConfig::Light),
            "dark" => Ok(ThemeModeConfig::Dark),
            "system" => Ok(ThemeModeConfig::System),
            _ => Err(ParseTokenError::new("theme mode config", s)),
        }
    }
}

/// Which store field a theme is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeSource {
    #[default]
    Mode,
    TabMode,
}
