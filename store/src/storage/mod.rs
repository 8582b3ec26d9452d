//! Persistence adapters for the theme store.
//!
//! The store persists a single JSON document under one key. Adapters only
//! move opaque text around; encoding lives in [`StoredTheme`].

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::ThemeResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokens::{ThemeMode, ThemeModeConfig};

/// Key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme-store";

/// Asynchronous key/value text storage.
///
/// Implementations must be safe to share between the store's initialization
/// task and its persistence writer.
#[async_trait]
pub trait ThemeStorage: Send + Sync {
    /// Returns the stored text, or `None` when nothing is stored under `key`.
    async fn get_item(&self, key: &str) -> ThemeResult<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> ThemeResult<()>;

    /// Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> ThemeResult<()>;
}

/// Storage that keeps nothing. Reads always miss and writes succeed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

#[async_trait]
impl ThemeStorage for NoopStorage {
    async fn get_item(&self, _key: &str) -> ThemeResult<Option<String>> {
        Ok(None)
    }

    async fn set_item(&self, _key: &str, _value: &str) -> ThemeResult<()> {
        Ok(())
    }

    async fn remove_item(&self, _key: &str) -> ThemeResult<()> {
        Ok(())
    }
}

/// Where and under which key the store persists itself.
#[derive(Clone)]
pub struct PersistConfig {
    pub key: String,
    pub storage: Arc<dyn ThemeStorage>,
}

impl PersistConfig {
    pub fn new(key: impl Into<String>, storage: Arc<dyn ThemeStorage>) -> Self {
        Self {
            key: key.into(),
            storage,
        }
    }

    /// Uses the default key with the given adapter.
    pub fn with_storage(storage: Arc<dyn ThemeStorage>) -> Self {
        Self::new(DEFAULT_STORAGE_KEY, storage)
    }
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self::with_storage(Arc::new(NoopStorage))
    }
}

impl fmt::Debug for PersistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistConfig")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// The persisted subset of store state.
///
/// Both fields are optional on read so that partial payloads written by
/// older versions still load; writes always carry both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredTheme {
    #[serde(default)]
    pub mode: Option<ThemeMode>,
    #[serde(default)]
    pub config: Option<ThemeModeConfig>,
}

impl StoredTheme {
    pub fn new(mode: ThemeMode, config: ThemeModeConfig) -> Self {
        Self {
            mode: Some(mode),
            config: Some(config),
        }
    }

    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a persisted payload. Unknown mode or config names are errors.
    pub fn from_json(text: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    #[test]
    fn test_stored_theme_json_shape() {
        let stored = StoredTheme::new(ThemeMode::Dark, ThemeModeConfig::System);
        assert_eq!(
            stored.to_json().unwrap(),
            r#"{"mode":"dark","config":"system"}"#
        );
    }

    #[test]
    fn test_partial_payload_loads() {
        let stored = StoredTheme::from_json(r#"{"config":"dark"}"#).unwrap();
        assert_eq!(stored.mode, None);
        assert_eq!(stored.config, Some(ThemeModeConfig::Dark));

        let empty = StoredTheme::from_json("{}").unwrap();
        assert_eq!(empty, StoredTheme::default());
    }

    #[test]
    fn test_unknown_values_rejected() {
        let result = StoredTheme::from_json(r#"{"mode":"sepia","config":"light"}"#);
        assert!(matches!(result, Err(ThemeError::Parse(_))));

        let result = StoredTheme::from_json("not json");
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }

    #[tokio::test]
    async fn test_noop_storage_never_returns_data() {
        let storage = NoopStorage;
        storage.set_item("theme-store", "{}").await.unwrap();
        assert_eq!(storage.get_item("theme-store").await.unwrap(), None);
        storage.remove_item("theme-store").await.unwrap();
    }

    #[test]
    fn test_persist_config_defaults() {
        let config = PersistConfig::default();
        assert_eq!(config.key, DEFAULT_STORAGE_KEY);
        assert!(format!("{config:?}").contains("theme-store"));
    }
}
