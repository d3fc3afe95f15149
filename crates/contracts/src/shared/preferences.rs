//! User preferences persisted in a string key-value store
//! (browser `localStorage` in the app, memory in tests).

use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key of the dark-mode flag.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// String key-value store.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used where no browser storage is available.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Dark-mode flag, stored as `"true"` / `"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DarkMode {
    enabled: bool,
}

impl DarkMode {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Read the flag. Anything but `"true"` (including a missing key or a
    /// failed read) means light mode.
    pub fn load(store: &impl PreferenceStore) -> Self {
        match store.get_item(DARK_MODE_STORAGE_KEY) {
            Ok(value) => Self::new(value.as_deref() == Some("true")),
            Err(e) => {
                log::warn!("failed to read dark mode preference: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn as_storage_value(&self) -> &'static str {
        if self.enabled {
            "true"
        } else {
            "false"
        }
    }

    pub fn save(&self, store: &impl PreferenceStore) -> Result<()> {
        store.set_item(DARK_MODE_STORAGE_KEY, self.as_storage_value())
    }

    /// Flip the flag and persist it. The flag flips even when the write fails.
    pub fn toggle(&mut self, store: &impl PreferenceStore) -> Result<bool> {
        self.enabled = !self.enabled;
        self.save(store)?;
        Ok(self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("storage disabled"))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("quota exceeded"))
        }
    }

    #[test]
    fn test_load_defaults_to_light() {
        let store = MemoryPreferenceStore::new();
        assert!(!DarkMode::load(&store).is_enabled());
        assert!(!DarkMode::load(&BrokenStore).is_enabled());
    }

    #[test]
    fn test_load_only_accepts_true() {
        let store = MemoryPreferenceStore::new();
        store.set_item(DARK_MODE_STORAGE_KEY, "true").unwrap();
        assert!(DarkMode::load(&store).is_enabled());

        store.set_item(DARK_MODE_STORAGE_KEY, "TRUE").unwrap();
        assert!(!DarkMode::load(&store).is_enabled());

        store.set_item(DARK_MODE_STORAGE_KEY, "1").unwrap();
        assert!(!DarkMode::load(&store).is_enabled());
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryPreferenceStore::new();
        let mut mode = DarkMode::load(&store);

        assert!(mode.toggle(&store).unwrap());
        assert_eq!(
            store.get_item(DARK_MODE_STORAGE_KEY).unwrap().as_deref(),
            Some("true")
        );
        assert!(DarkMode::load(&store).is_enabled());

        assert!(!mode.toggle(&store).unwrap());
        assert_eq!(
            store.get_item(DARK_MODE_STORAGE_KEY).unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_toggle_flips_even_if_write_fails() {
        let mut mode = DarkMode::default();
        assert!(mode.toggle(&BrokenStore).is_err());
        assert!(mode.is_enabled());
    }
}
