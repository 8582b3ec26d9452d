use super::{SchemeSubscription, add_system_scheme_listener, system_color_scheme};
use crate::store::ThemeStore;
use std::sync::Arc;
use tokens::ThemeMode;

/// Callback for observed system mode changes
pub type ModeChangeCallback = Arc<dyn Fn(ThemeMode) + Send + Sync>;

/// Keeps a store in sync with the system scheme while it follows the system.
///
/// Uses the store's own scheme provider. Dropping the listener detaches it.
pub struct SystemSchemeListener {
    subscription: SchemeSubscription,
}

impl SystemSchemeListener {
    pub fn attach(store: &ThemeStore, on_change: Option<ModeChangeCallback>) -> Self {
        let provider = store.scheme_provider();

        if store.state().config.is_system() {
            store.apply_system_scheme(system_color_scheme(provider.as_ref()));
        }

        let weak = store.downgrade();
        let subscription = add_system_scheme_listener(provider.as_ref(), move |mode| {
            if let Some(store) = weak.upgrade() {
                store.apply_system_scheme(mode);
            }
            if let Some(callback) = &on_change {
                callback(mode);
            }
        });

        log::debug!("System scheme listener attached");
        Self { subscription }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn detach(self) {
        log::debug!("System scheme listener detached");
    }
}
