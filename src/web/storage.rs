//! `localStorage`-backed preference store.
//!
//! Storage may be unavailable (privacy modes, sandboxed frames); the store
//! then behaves as empty and drops writes.

use web_sys::{Storage, Window};

use super::logged;
use crate::preference::PreferenceStore;

pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = logged("open localStorage", window.local_storage()).flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        logged("read preference", storage.get_item(key)).flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            logged("write preference", storage.set_item(key, value));
        }
    }
}
