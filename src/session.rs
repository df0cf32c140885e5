//! Persisted "is a user logged in" flag.
//!
//! The flag lives under a single key in a key-value store. Anything other than
//! the literal `"true"` (missing key, garbage, an unreadable store) reads as
//! logged out.

use log::warn;

const FLAG_TRUE: &str = "true";
const FLAG_FALSE: &str = "false";

/// Narrow key-value surface the session flag needs.
pub trait FlagStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// `window.localStorage`, resolved on every call so a store that disappears
/// (private mode, quota, sandboxed iframe) just reads as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl FlagStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let ls = get_local_storage().ok_or("localStorage unavailable")?;
        ls.set_item(key, value)
            .map_err(|_| format!("localStorage write failed for {key}"))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let ls = get_local_storage().ok_or("localStorage unavailable")?;
        ls.remove_item(key)
            .map_err(|_| format!("localStorage remove failed for {key}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
}

impl<S: FlagStorage> SessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.get(&self.key).as_deref() == Some(FLAG_TRUE)
    }

    pub fn set_authenticated(&self, value: bool) {
        let raw = if value { FLAG_TRUE } else { FLAG_FALSE };
        if let Err(e) = self.storage.set(&self.key, raw) {
            warn!("session flag not persisted: {e}");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            warn!("session flag not cleared: {e}");
        }
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::FlagStorage;

    /// In-memory stand-in for localStorage. Tests pass `&MemoryStorage` to
    /// the store and inspect the map afterwards.
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
        unavailable: Cell<bool>,
    }

    impl MemoryStorage {
        pub fn unavailable() -> Self {
            let s = Self::default();
            s.unavailable.set(true);
            s
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        pub fn insert(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.into(), value.into());
        }
    }

    impl FlagStorage for &MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            if self.unavailable.get() {
                return None;
            }
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if self.unavailable.get() {
                return Err("storage unavailable".into());
            }
            self.items.borrow_mut().insert(key.into(), value.into());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            if self.unavailable.get() {
                return Err("storage unavailable".into());
            }
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }
}
