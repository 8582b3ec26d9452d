//! System color-scheme detection.
//!
//! A [`SystemSchemeProvider`] reports the platform's current color scheme as
//! an opaque string and notifies subscribers when it changes. Anything other
//! than `"light"` or `"dark"` is treated as light by [`system_color_scheme`].

mod listener;
mod manual;
mod os;

pub use listener::{ModeChangeCallback, SystemSchemeListener};
pub use manual::ManualSchemeProvider;
pub use os::{DEFAULT_POLL_INTERVAL, OsSchemeProvider, SchemeDetector, detect_os_scheme};

use std::sync::Arc;
use tokens::ThemeMode;
use tokio_util::sync::CancellationToken;

/// Callback invoked with the raw scheme value on every change.
pub type SchemeCallback = Arc<dyn Fn(String) + Send + Sync>;

pub trait SystemSchemeProvider: Send + Sync {
    /// Current scheme, or `None` when the platform does not report one.
    ///
    /// May block; async callers should go through `spawn_blocking`.
    fn color_scheme(&self) -> Option<String>;

    /// Registers `callback` for scheme changes until the returned
    /// subscription is cancelled or dropped.
    fn subscribe(&self, callback: SchemeCallback) -> SchemeSubscription;
}

/// Handle to a scheme-change subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct SchemeSubscription {
    token: CancellationToken,
}

impl SchemeSubscription {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// A subscription that never delivers anything.
    pub fn inert() -> Self {
        let token = CancellationToken::new();
        token.cancel();
        Self { token }
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn unsubscribe(self) {
        self.token.cancel();
    }
}

impl Drop for SchemeSubscription {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Reads the provider's scheme and normalizes it to a concrete mode.
pub fn system_color_scheme(provider: &dyn SystemSchemeProvider) -> ThemeMode {
    ThemeMode::from_scheme(provider.color_scheme().as_deref())
}

/// Subscribes to scheme changes, forwarding only values that name a mode.
pub fn add_system_scheme_listener<F>(
    provider: &dyn SystemSchemeProvider,
    callback: F,
) -> SchemeSubscription
where
    F: Fn(ThemeMode) + Send + Sync + 'static,
{
    provider.subscribe(Arc::new(move |scheme: String| {
        match scheme.parse::<ThemeMode>() {
            Ok(mode) => callback(mode),
            Err(_) => log::debug!("Ignoring unrecognized system color scheme '{scheme}'"),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_system_color_scheme_normalizes() {
        let provider = ManualSchemeProvider::new(Some("dark"));
        assert_eq!(system_color_scheme(&provider), ThemeMode::Dark);

        provider.set_scheme("no-preference");
        assert_eq!(system_color_scheme(&provider), ThemeMode::Light);

        let unknown = ManualSchemeProvider::new(None);
        assert_eq!(system_color_scheme(&unknown), ThemeMode::Light);
    }

    #[test]
    fn test_listener_filters_invalid_schemes() {
        let provider = ManualSchemeProvider::new(Some("light"));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let _subscription = add_system_scheme_listener(&provider, move |mode| {
            sink.lock().unwrap().push(mode);
        });

        provider.set_scheme("dark");
        provider.set_scheme("high-contrast");
        provider.set_scheme("light");

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ThemeMode::Dark, ThemeMode::Light]
        );
    }

    #[test]
    fn test_subscription_drop_cancels() {
        let token = CancellationToken::new();
        let subscription = SchemeSubscription::new(token.clone());
        assert!(subscription.is_active());

        subscription.unsubscribe();
        assert!(token.is_cancelled());
        assert!(!SchemeSubscription::inert().is_active());
    }
}
