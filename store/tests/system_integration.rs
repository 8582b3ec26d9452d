use claims::{assert_ok, assert_some_eq};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use themekit::{
    FileStorage, ManualSchemeProvider, PersistConfig, SystemSchemeListener, ThemeStorage,
    ThemeStore,
};
use tokens::{ThemeMode, ThemeModeConfig};

async fn file_backed_store(
    dir: &TempDir,
    provider: Arc<ManualSchemeProvider>,
) -> (ThemeStore, FileStorage) {
    let storage = FileStorage::new(dir.path());
    let store = ThemeStore::create(
        PersistConfig::with_storage(Arc::new(storage.clone())),
        provider,
    )
    .unwrap();
    store.ready().await;
    (store, storage)
}

#[tokio::test]
async fn test_listener_follows_scheme_in_system_config() {
    let temp = TempDir::new().unwrap();
    let provider = Arc::new(ManualSchemeProvider::new(Some("light")));
    let (store, storage) = file_backed_store(&temp, provider.clone()).await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let listener = SystemSchemeListener::attach(
        &store,
        Some(Arc::new(move |mode| sink.lock().unwrap().push(mode))),
    );

    store.service().set_system_mode();
    provider.set_scheme("dark");
    assert_eq!(store.current_theme_mode(), ThemeMode::Dark);

    provider.set_scheme("sepia");
    assert_eq!(store.current_theme_mode(), ThemeMode::Dark);

    store.service().switch_mode(ThemeMode::Light);
    store.set_mode_config(ThemeModeConfig::Light);
    provider.set_scheme("dark");
    assert_eq!(store.current_theme_mode(), ThemeMode::Light);

    assert_eq!(*seen.lock().unwrap(), vec![ThemeMode::Dark, ThemeMode::Dark]);

    drop(listener);
    assert_eq!(provider.subscriber_count(), 0);

    store.flush().await;
    assert_some_eq!(
        assert_ok!(storage.get_item("theme-store").await),
        r#"{"mode":"light","config":"light"}"#.to_string()
    );
}

#[tokio::test]
async fn test_system_config_restored_from_disk() {
    let temp = TempDir::new().unwrap();

    let provider = Arc::new(ManualSchemeProvider::new(Some("dark")));
    let (store, _) = file_backed_store(&temp, provider).await;
    store.set_mode_config(ThemeModeConfig::System);
    store.flush().await;
    drop(store);

    let provider = Arc::new(ManualSchemeProvider::new(Some("light")));
    let (store, _) = file_backed_store(&temp, provider.clone()).await;
    assert_eq!(store.state().config, ThemeModeConfig::System);
    assert_eq!(store.current_theme_mode(), ThemeMode::Light);

    let _listener = SystemSchemeListener::attach(&store, None);
    provider.set_scheme("dark");
    assert_eq!(store.current_theme_mode(), ThemeMode::Dark);
}

#[tokio::test]
async fn test_listener_does_not_keep_store_alive() {
    let provider = Arc::new(ManualSchemeProvider::new(Some("light")));
    let store = ThemeStore::create(PersistConfig::default(), provider.clone()).unwrap();
    store.ready().await;

    let listener = SystemSchemeListener::attach(&store, None);
    let weak = store.downgrade();
    drop(store);

    provider.set_scheme("dark");
    assert!(weak.upgrade().is_none());
    assert!(listener.is_attached());
}
