use leptos::prelude::*;
use portfolio_app::storage::load_dark_mode;
use portfolio_app::{update, Message, PageState, SiteConfig, UpdateResult};

use crate::browser::{self, LocalStorage};

/// Reactive handle to the page state
///
/// Copyable, so every component gets its own handle and dispatches through
/// the same update loop.
#[derive(Clone, Copy)]
pub struct PageStore {
    state: RwSignal<PageState>,
    storage_key: StoredValue<String>,
}

impl PageStore {
    /// Create the store, restoring the saved theme preference
    pub fn new(config: &SiteConfig) -> Self {
        let dark_mode = load_dark_mode(&LocalStorage, &config.theme.storage_key);
        Self {
            state: RwSignal::new(PageState::with_settings(config.scroll.clone(), dark_mode)),
            storage_key: StoredValue::new(config.theme.storage_key.clone()),
        }
    }

    /// Run a message through `update()` and perform the resulting actions
    pub fn dispatch(&self, message: Message) {
        let mut next = Some(message);
        while let Some(msg) = next {
            let mut result = UpdateResult::none();
            self.state.update(|state| result = update(state, msg));

            if let Some(action) = result.action {
                self.storage_key
                    .with_value(|key| browser::perform(action, key));
            }
            next = result.message;
        }
    }

    /// Read from the page state, tracking the signal
    pub fn with<T>(&self, f: impl FnOnce(&PageState) -> T) -> T {
        self.state.with(f)
    }
}
