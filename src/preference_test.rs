use super::*;
use crate::memory::MemoryStore;

#[test]
fn absent_record_is_no_preference() {
    let store = MemoryStore::default();
    assert_eq!(read_preference(&store, "nuit"), None);
}

#[test]
fn stringified_booleans_map_to_modes() {
    let mut store = MemoryStore::default();
    store.set("nuit", "true");
    assert_eq!(read_preference(&store, "nuit"), Some(ThemeMode::Night));
    store.set("nuit", "false");
    assert_eq!(read_preference(&store, "nuit"), Some(ThemeMode::Day));
}

#[test]
fn malformed_record_is_no_preference() {
    let mut store = MemoryStore::default();
    for raw in ["null", "", "yes", "1", "True"] {
        store.set("nuit", raw);
        assert_eq!(read_preference(&store, "nuit"), None, "raw value {raw:?}");
    }
}

#[test]
fn write_then_read_returns_mode() {
    let mut store = MemoryStore::default();
    write_preference(&mut store, "nuit", ThemeMode::Night);
    assert_eq!(store.get("nuit").as_deref(), Some("true"));
    write_preference(&mut store, "nuit", ThemeMode::Day);
    assert_eq!(store.get("nuit").as_deref(), Some("false"));
}

#[test]
fn other_keys_are_untouched() {
    let mut store = MemoryStore::default();
    write_preference(&mut store, "nuit", ThemeMode::Night);
    assert_eq!(read_preference(&store, "dark"), None);
}
