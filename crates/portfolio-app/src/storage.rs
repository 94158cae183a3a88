//! Durable key-value storage for the theme preference
//!
//! The browser front end implements [`PreferenceStore`] over `localStorage`;
//! [`MemoryStore`] backs tests and any host-side use.

use std::cell::RefCell;
use std::collections::HashMap;

use portfolio_core::theme::{encode_preference, parse_preference};
use portfolio_core::{Error, Result};
use tracing::{debug, warn};

/// String key-value storage that may be unavailable at any time
pub trait PreferenceStore {
    /// Read the raw value under `key`; `Ok(None)` when absent
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Read the dark-mode preference, absorbing every failure as light mode
pub fn load_dark_mode(store: &impl PreferenceStore, key: &str) -> bool {
    match store.read(key) {
        Ok(raw) => {
            let dark_mode = parse_preference(raw.as_deref());
            debug!("Restored theme preference {}={}", key, dark_mode);
            dark_mode
        }
        Err(e) => {
            warn!("Theme preference unavailable, using light mode: {}", e);
            false
        }
    }
}

/// Persist the dark-mode preference, absorbing failures
///
/// Returns whether the write succeeded so callers can log or test it.
pub fn persist_dark_mode(store: &impl PreferenceStore, key: &str, dark_mode: bool) -> bool {
    match store.write(key, &encode_preference(dark_mode)) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to persist theme preference: {}", e);
            false
        }
    }
}

/// In-memory [`PreferenceStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, like `localStorage` in a
    /// sandboxed iframe or with storage disabled
    pub fn unavailable() -> Self {
        Self {
            entries: RefCell::default(),
            unavailable: true,
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            Err(Error::storage("storage is unavailable"))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
