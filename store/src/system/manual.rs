use super::{SchemeCallback, SchemeSubscription, SystemSchemeProvider};
use std::sync::{Mutex, PoisonError};
use tokio_util::sync::CancellationToken;

/// Provider driven by the host application.
///
/// UI toolkits that already receive appearance-change events push them in
/// with [`ManualSchemeProvider::set_scheme`]. Subscribers are notified
/// synchronously on the calling thread.
#[derive(Default)]
pub struct ManualSchemeProvider {
    scheme: Mutex<Option<String>>,
    subscribers: Mutex<Vec<(CancellationToken, SchemeCallback)>>,
}

impl ManualSchemeProvider {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            scheme: Mutex::new(initial.map(str::to_string)),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Records a new scheme and notifies every live subscriber, even when
    /// the value did not change.
    pub fn set_scheme(&self, scheme: impl Into<String>) {
        let scheme = scheme.into();
        *self.scheme.lock().unwrap_or_else(PoisonError::into_inner) = Some(scheme.clone());

        let callbacks: Vec<SchemeCallback> = {
            let mut subscribers = self
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subscribers.retain(|(token, _)| !token.is_cancelled());
            subscribers
                .iter()
                .map(|(_, callback)| callback.clone())
                .collect()
        };

        log::debug!(
            "System scheme set to '{scheme}', notifying {} subscriber(s)",
            callbacks.len()
        );
        for callback in callbacks {
            callback(scheme.clone());
        }
    }

    pub fn clear_scheme(&self) {
        *self.scheme.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Number of subscriptions that have not been cancelled.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(token, _)| !token.is_cancelled())
            .count()
    }
}

impl SystemSchemeProvider for ManualSchemeProvider {
    fn color_scheme(&self) -> Option<String> {
        self.scheme
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn subscribe(&self, callback: SchemeCallback) -> SchemeSubscription {
        let token = CancellationToken::new();
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|(token, _)| !token.is_cancelled());
        subscribers.push((token.clone(), callback));
        SchemeSubscription::new(token)
    }
}
