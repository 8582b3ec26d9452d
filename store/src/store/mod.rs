//! The theme mode store.
//!
//! [`ThemeStore`] holds the user's mode intent, the concrete mode in effect,
//! an optional tab-bar override and custom theme configuration. Setters are
//! synchronous; persistence happens on a background writer and startup
//! restoration on a background task.

mod accessors;
mod writer;

use crate::error::{ThemeError, ThemeResult};
use crate::service::ThemeService;
use crate::storage::{PersistConfig, StoredTheme};
use crate::system::{OsSchemeProvider, SystemSchemeProvider, system_color_scheme};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tokens::{ThemeConfig, ThemeMode, ThemeModeConfig};
use tokio::runtime::Handle;
use tokio::sync::watch;
use writer::PersistWriter;

/// Snapshot of the store.
///
/// `mode` is always concrete; when `config` is `System` it mirrors the last
/// known system scheme.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStoreState {
    pub config: ThemeModeConfig,
    pub mode: ThemeMode,
    pub tab_mode: Option<ThemeMode>,
    pub theme_config: Option<ThemeConfig>,
}

struct StoreInner {
    state: RwLock<ThemeStoreState>,
    /// Set by mode setters; only written while holding the state lock.
    mode_touched: AtomicBool,
    changes: watch::Sender<ThemeStoreState>,
    ready: watch::Sender<bool>,
    persist: PersistConfig,
    scheme: Arc<dyn SystemSchemeProvider>,
    writer: PersistWriter,
}

/// Shared handle to the theme store. Clones refer to the same store.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

/// Non-owning handle, used by long-lived callbacks.
#[derive(Clone)]
pub struct WeakThemeStore {
    inner: Weak<StoreInner>,
}

impl WeakThemeStore {
    pub fn upgrade(&self) -> Option<ThemeStore> {
        self.inner.upgrade().map(|inner| ThemeStore { inner })
    }
}

impl ThemeStore {
    /// Creates the store and starts restoring persisted state.
    ///
    /// Must be called from within a Tokio runtime. Until [`ThemeStore::ready`]
    /// completes, readers see the defaults (light / light). A mode set before
    /// then takes precedence over the persisted one.
    pub fn create(
        persist: PersistConfig,
        scheme: Arc<dyn SystemSchemeProvider>,
    ) -> ThemeResult<Self> {
        let runtime = Handle::try_current().map_err(|e| {
            ThemeError::Runtime(format!("Theme store requires a Tokio runtime: {e}"))
        })?;

        let (changes, _) = watch::channel(ThemeStoreState::default());
        let (ready, _) = watch::channel(false);
        let writer = PersistWriter::spawn(&runtime, persist.clone());

        let store = Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(ThemeStoreState::default()),
                mode_touched: AtomicBool::new(false),
                changes,
                ready,
                persist,
                scheme,
                writer,
            }),
        };

        let init = store.clone();
        runtime.spawn(async move {
            init.initialize().await;
        });

        log::debug!(
            "Theme store created with storage key '{}'",
            store.inner.persist.key
        );
        Ok(store)
    }

    /// Store with no persistence and OS scheme detection.
    pub fn with_defaults() -> ThemeResult<Self> {
        Self::create(
            PersistConfig::default(),
            Arc::new(OsSchemeProvider::default()),
        )
    }

    async fn initialize(&self) {
        match self.load_persisted().await {
            Ok(Some(stored)) => {
                let config = stored.config.unwrap_or_default();
                let mode = match config {
                    ThemeModeConfig::System => self.query_system_scheme().await,
                    _ => stored.mode.unwrap_or_default(),
                };
                self.apply_persisted(config, mode);
            }
            Ok(None) => log::debug!(
                "No persisted theme under '{}', keeping defaults",
                self.inner.persist.key
            ),
            Err(e) => log::warn!("Failed to initialize theme from storage: {e}"),
        }
        self.inner.ready.send_replace(true);
    }

    async fn load_persisted(&self) -> ThemeResult<Option<StoredTheme>> {
        let persist = &self.inner.persist;
        match persist.storage.get_item(&persist.key).await? {
            Some(text) if !text.trim().is_empty() => Ok(Some(StoredTheme::from_json(&text)?)),
            _ => Ok(None),
        }
    }

    /// Provider queries may block, so the init task runs them on the
    /// blocking pool.
    async fn query_system_scheme(&self) -> ThemeMode {
        let scheme = self.inner.scheme.clone();
        match tokio::task::spawn_blocking(move || system_color_scheme(scheme.as_ref())).await {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("System scheme query failed during initialization: {e}");
                ThemeMode::default()
            }
        }
    }

    fn apply_persisted(&self, config: ThemeModeConfig, mode: ThemeMode) {
        let touched = &self.inner.mode_touched;
        let applied = self.update(|state| {
            if touched.load(Ordering::SeqCst) {
                return false;
            }
            state.config = config;
            state.mode = mode;
            true
        });

        if applied {
            log::info!("Restored theme from storage: config={config}, mode={mode}");
        } else {
            log::debug!("Mode changed before initialization finished; ignoring stored {config}");
        }
    }

    /// Resolves once startup restoration has finished, successfully or not.
    pub async fn ready(&self) {
        let mut ready = self.inner.ready.subscribe();
        // The sender lives in `self`, so this cannot observe a closed channel.
        let _ = ready.wait_for(|done| *done).await;
    }

    pub fn is_ready(&self) -> bool {
        *self.inner.ready.borrow()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, ThemeStoreState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, f: impl FnOnce(&mut ThemeStoreState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut state);
            (result, state.clone())
        };
        self.inner.changes.send_replace(snapshot);
        result
    }

    /// Like `update`, but marks the mode as set by the caller so that
    /// startup restoration does not overwrite it.
    fn update_mode<R>(&self, f: impl FnOnce(&mut ThemeStoreState) -> R) -> R {
        let touched = &self.inner.mode_touched;
        self.update(|state| {
            touched.store(true, Ordering::SeqCst);
            f(state)
        })
    }

    /// Like `update_mode`, and queues the resulting `{mode, config}` while
    /// the write lock is still held, so writes are submitted in the same
    /// order as the changes they carry.
    fn update_persisted(&self, f: impl FnOnce(&mut ThemeStoreState)) {
        let writer = &self.inner.writer;
        self.update_mode(|state| {
            f(state);
            submit_state(writer, state);
        });
    }

    /// Sets the concrete mode and queues a write of `{mode, config}`.
    ///
    /// `config` is left untouched, so calling this while following the
    /// system keeps `config = system`.
    pub fn set_theme_mode(&self, mode: ThemeMode) {
        self.update_persisted(|state| state.mode = mode);
        log::debug!("Theme mode set to {mode}");
    }

    /// Sets the mode intent and concrete mode together, then persists both.
    ///
    /// For `System` this queries the scheme provider on the calling thread,
    /// which may block briefly with [`OsSchemeProvider`].
    pub fn set_mode_config(&self, config: ThemeModeConfig) {
        let scheme = &self.inner.scheme;
        let mode = config.resolve(|| system_color_scheme(scheme.as_ref()));
        self.update_persisted(|state| {
            state.config = config;
            state.mode = mode;
        });
        log::debug!("Theme config set to {config} (mode {mode})");
    }

    /// Enters system mode without persisting.
    pub(crate) fn enter_system_mode(&self, mode: ThemeMode) {
        self.update_mode(|state| {
            state.config = ThemeModeConfig::System;
            state.mode = mode;
        });
        log::debug!("Following system color scheme (currently {mode})");
    }

    /// Replaces the custom theme configuration. Not persisted.
    pub fn set_theme_config(&self, config: ThemeConfig) {
        self.update(|state| state.theme_config = Some(config));
    }

    pub fn clear_theme_config(&self) {
        self.update(|state| state.theme_config = None);
    }

    /// Sets or clears the tab-bar override. Not persisted.
    pub fn set_tab_mode(&self, mode: Option<ThemeMode>) {
        self.update(|state| state.tab_mode = mode);
    }

    /// Applies a system scheme change while following the system.
    ///
    /// Returns whether the mode changed. Not persisted.
    pub fn apply_system_scheme(&self, mode: ThemeMode) -> bool {
        let changed = {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if state.config.is_system() && state.mode != mode {
                state.mode = mode;
                Some(state.clone())
            } else {
                None
            }
        };

        match changed {
            Some(snapshot) => {
                self.inner.changes.send_replace(snapshot);
                log::info!("System color scheme applied: {mode}");
                true
            }
            None => false,
        }
    }

    /// Queues a write of the current `{mode, config}`.
    pub fn persist_state(&self) {
        let state = self.read();
        submit_state(&self.inner.writer, &state);
    }

    /// Waits until every persistence write queued so far has been attempted.
    pub async fn flush(&self) {
        self.inner.writer.flush().await;
    }

    /// Removes the persisted state. In-memory state is unchanged.
    pub async fn reset_persisted(&self) -> ThemeResult<()> {
        self.flush().await;
        let persist = &self.inner.persist;
        persist.storage.remove_item(&persist.key).await?;
        log::info!("Removed persisted theme under '{}'", persist.key);
        Ok(())
    }

    /// Receives a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ThemeStoreState> {
        self.inner.changes.subscribe()
    }

    pub fn state(&self) -> ThemeStoreState {
        self.read().clone()
    }

    pub fn storage_key(&self) -> &str {
        &self.inner.persist.key
    }

    pub fn scheme_provider(&self) -> Arc<dyn SystemSchemeProvider> {
        self.inner.scheme.clone()
    }

    pub fn service(&self) -> ThemeService {
        ThemeService::new(self.clone())
    }

    pub fn downgrade(&self) -> WeakThemeStore {
        WeakThemeStore {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

fn submit_state(writer: &PersistWriter, state: &ThemeStoreState) {
    match StoredTheme::new(state.mode, state.config).to_json() {
        Ok(payload) => {
            writer.submit(payload);
        }
        Err(e) => log::warn!("Failed to encode theme state: {e}"),
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &*self.read())
            .field("persist", &self.inner.persist)
            .field("ready", &self.is_ready())
            .finish()
    }
}
