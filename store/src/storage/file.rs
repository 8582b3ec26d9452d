use super::ThemeStorage;
use crate::error::{ThemeError, ThemeResult};
use crate::validation::{StorageKeyValidator, Validator};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config directory.
const APP_DIR: &str = "themekit";

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage under the platform config directory, e.g.
    /// `~/.config/themekit` on Linux.
    pub fn default_location() -> ThemeResult<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            ThemeError::Config("Could not determine the user config directory".to_string())
        })?;
        Ok(Self::new(base.join(APP_DIR)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`, after validating the key.
    pub fn path_for(&self, key: &str) -> ThemeResult<PathBuf> {
        StorageKeyValidator.validate(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl ThemeStorage for FileStorage {
    async fn get_item(&self, key: &str) -> ThemeResult<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ThemeError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> ThemeResult<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await.map_err(|e| {
            ThemeError::Storage(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            ThemeError::Storage(format!("Failed to replace {}: {e}", path.display()))
        })?;

        log::trace!("Wrote theme payload to {}", path.display());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> ThemeResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ThemeError::Storage(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_creates_directory() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("nested").join("themekit"));

        assert_eq!(storage.get_item("theme-store").await.unwrap(), None);

        storage
            .set_item("theme-store", r#"{"mode":"dark","config":"dark"}"#)
            .await
            .unwrap();

        let on_disk = std::fs::read_to_string(storage.dir().join("theme-store.json")).unwrap();
        assert_eq!(on_disk, r#"{"mode":"dark","config":"dark"}"#);
        assert!(!storage.dir().join("theme-store.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_remove_missing_is_ok() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());

        storage.remove_item("theme-store").await.unwrap();
        storage.set_item("theme-store", "{}").await.unwrap();
        storage.remove_item("theme-store").await.unwrap();
        assert_eq!(storage.get_item("theme-store").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());

        let result = storage.set_item("../outside", "{}").await;
        assert!(matches!(result, Err(ThemeError::Validation(_))));
    }
}
