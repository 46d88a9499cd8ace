//! Persisted theme preference.
//!
//! The record is a single stringified boolean: `"true"` means the user last
//! chose night mode, `"false"` day mode. Anything else (including the
//! `"null"` a stale page script may have written) reads as "no explicit
//! preference".

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use crate::theme::ThemeMode;

/// Durable key/value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Read the explicit theme choice stored under `key`, if any.
pub fn read_preference(store: &impl PreferenceStore, key: &str) -> Option<ThemeMode> {
    let raw = store.get(key)?;
    match raw.trim() {
        "true" => Some(ThemeMode::Night),
        "false" => Some(ThemeMode::Day),
        other => {
            if other != "null" {
                log::warn!("ignoring malformed theme preference {other:?} under {key:?}");
            }
            None
        }
    }
}

/// Persist `mode` as the user's explicit theme choice.
pub fn write_preference(store: &mut impl PreferenceStore, key: &str, mode: ThemeMode) {
    store.set(key, if mode.is_night() { "true" } else { "false" });
}
