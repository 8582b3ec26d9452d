use super::{SchemeCallback, SchemeSubscription, SystemSchemeProvider};
use dark_light::{Mode as OsThemeMode, detect as detect_os_theme};
use std::time::Duration;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Function used to read the platform scheme.
pub type SchemeDetector = fn() -> Option<String>;

/// Reads the desktop appearance through `dark-light`.
pub fn detect_os_scheme() -> Option<String> {
    let scheme = match detect_os_theme() {
        OsThemeMode::Dark => "dark",
        OsThemeMode::Light => "light",
    };
    Some(scheme.to_string())
}

/// Provider backed by the operating system's appearance setting.
///
/// The platform has no portable change notification, so each subscription
/// polls the detector on a Tokio interval and fires when the value differs
/// from the previous poll.
#[derive(Debug, Clone)]
pub struct OsSchemeProvider {
    poll_interval: Duration,
    detector: SchemeDetector,
}

impl OsSchemeProvider {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            detector: detect_os_scheme,
        }
    }

    /// Replaces the detector, e.g. to force a scheme in tests.
    pub fn with_detector(mut self, detector: SchemeDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    async fn poll(
        detector: SchemeDetector,
        period: Duration,
        callback: SchemeCallback,
        token: CancellationToken,
    ) {
        let mut last = detect_blocking(detector).await;
        let mut ticker = interval(period);
        ticker.tick().await; // Skip the first immediate tick

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    log::debug!("System scheme polling stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let current = detect_blocking(detector).await;
                    if current != last {
                        log::info!(
                            "System color scheme changed: {} -> {}",
                            last.as_deref().unwrap_or("unknown"),
                            current.as_deref().unwrap_or("unknown")
                        );
                        if let Some(scheme) = current.clone() {
                            callback(scheme);
                        }
                        last = current;
                    }
                }
            }
        }
    }
}

impl Default for OsSchemeProvider {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

/// Detection may shell out or hit D-Bus, so it runs off the async workers.
async fn detect_blocking(detector: SchemeDetector) -> Option<String> {
    match tokio::task::spawn_blocking(detector).await {
        Ok(scheme) => scheme,
        Err(e) => {
            log::warn!("System scheme detection failed: {e}");
            None
        }
    }
}

impl SystemSchemeProvider for OsSchemeProvider {
    /// Runs the detector on the calling thread.
    fn color_scheme(&self) -> Option<String> {
        (self.detector)()
    }

    fn subscribe(&self, callback: SchemeCallback) -> SchemeSubscription {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                log::warn!("No Tokio runtime available; system scheme changes will not be observed");
                return SchemeSubscription::inert();
            }
        };

        let token = CancellationToken::new();
        runtime.spawn(Self::poll(
            self.detector,
            self.poll_interval,
            callback,
            token.clone(),
        ));
        SchemeSubscription::new(token)
    }
}
