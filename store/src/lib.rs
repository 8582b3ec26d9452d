//! # themekit
//!
//! Light/dark theme state for applications built on the `tokens` crate.
//!
//! ## Features
//!
//! - Mode store with synchronous setters and background persistence
//! - Pluggable storage adapters (memory, files, or none)
//! - System color-scheme detection and change listening
//! - Per-mode value selection for styles
//!
//! ## Modules
//!
//! - [`store`] - The theme store, its state and derived views
//! - [`service`] - High-level mode operations for UI code
//! - [`select`] - Per-mode value selection
//! - [`storage`] - Persistence adapters
//! - [`system`] - System color-scheme providers and listener
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types
//! - [`logger`] - Logging setup for binaries
//! - [`validation`] - Input validation
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use themekit::{MemoryStorage, OsSchemeProvider, PersistConfig, ThemeStore};
//! use tokens::ThemeMode;
//!
//! # async fn run() -> themekit::ThemeResult<()> {
//! let store = ThemeStore::create(
//!     PersistConfig::with_storage(Arc::new(MemoryStorage::new())),
//!     Arc::new(OsSchemeProvider::default()),
//! )?;
//! store.ready().await;
//!
//! store.service().switch_mode(ThemeMode::Dark);
//! let background = store.current_colors().background;
//! store.flush().await;
//! # let _ = background;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod select;
pub mod service;
pub mod storage;
pub mod store;
pub mod system;
pub mod validation;

pub use error::{ThemeError, ThemeResult};
pub use select::{Derived, ModeMap, ThemeContext, ThemeSelect, resolve};
pub use service::ThemeService;
pub use storage::{FileStorage, MemoryStorage, NoopStorage, PersistConfig, ThemeStorage};
pub use store::{ThemeStore, ThemeStoreState, WeakThemeStore};
pub use system::{
    ManualSchemeProvider, OsSchemeProvider, SchemeSubscription, SystemSchemeListener,
    SystemSchemeProvider, add_system_scheme_listener, system_color_scheme,
};
pub use validation::Validator;
