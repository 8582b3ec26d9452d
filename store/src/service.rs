use crate::store::ThemeStore;
use crate::system::system_color_scheme;
use tokens::{ThemeConfig, ThemeMode};

/// High-level operations for UI code, delegating to a [`ThemeStore`].
#[derive(Debug, Clone)]
pub struct ThemeService {
    store: ThemeStore,
}

impl ThemeService {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Switches the concrete mode and persists it.
    pub fn switch_mode(&self, mode: ThemeMode) {
        log::info!("Switching theme mode to {mode}");
        self.store.set_theme_mode(mode);
    }

    /// Follows the system scheme from now on.
    ///
    /// Queries the provider once and updates memory only; call
    /// [`ThemeStore::persist_state`] to store the new intent.
    pub fn set_system_mode(&self) -> ThemeMode {
        let mode = system_color_scheme(self.store.scheme_provider().as_ref());
        self.store.enter_system_mode(mode);
        log::info!("Theme now follows the system scheme ({mode})");
        mode
    }

    pub fn set_custom_theme_config(&self, config: ThemeConfig) {
        self.store.set_theme_config(config);
    }

    pub fn set_tab_mode(&self, mode: Option<ThemeMode>) {
        self.store.set_tab_mode(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, PersistConfig, ThemeStorage};
    use crate::system::ManualSchemeProvider;
    use std::sync::Arc;
    use tokens::ThemeModeConfig;

    #[tokio::test]
    async fn test_set_system_mode_does_not_persist() {
        let storage = MemoryStorage::new();
        let store = ThemeStore::create(
            PersistConfig::with_storage(Arc::new(storage.clone())),
            Arc::new(ManualSchemeProvider::new(Some("dark"))),
        )
        .unwrap();
        store.ready().await;
        let service = store.service();

        assert_eq!(service.set_system_mode(), ThemeMode::Dark);
        store.flush().await;

        let state = store.state();
        assert_eq!(state.config, ThemeModeConfig::System);
        assert_eq!(state.mode, ThemeMode::Dark);
        assert_eq!(storage.get_item("theme-store").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_switch_mode_keeps_config() {
        let store = ThemeStore::create(
            PersistConfig::default(),
            Arc::new(ManualSchemeProvider::new(Some("light"))),
        )
        .unwrap();
        store.ready().await;
        let service = ThemeService::new(store.clone());

        service.set_system_mode();
        service.switch_mode(ThemeMode::Dark);

        assert_eq!(store.state().config, ThemeModeConfig::System);
        assert_eq!(store.current_theme_mode(), ThemeMode::Dark);
    }
}
