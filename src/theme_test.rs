use super::*;
use crate::memory::{FixedClock, MemoryDocument, MemoryElement, MemoryStore};

// =============================================================
// Helpers
// =============================================================

struct Fixture {
    doc: MemoryDocument,
    body: usize,
    button: usize,
    night_sheet: usize,
    light_sheet: usize,
}

fn fixture() -> Fixture {
    let mut doc = MemoryDocument::new();
    doc.push_sheet(Some("https://docs.test/assets/css/style.css"));
    let night_sheet = doc.push_sheet(Some("https://docs.test/assets/css/vendor/obsidian.css"));
    let light_sheet = doc.push_sheet(Some("https://docs.test/assets/css/vendor/github.css"));
    let body = doc.push(MemoryElement::matching(&["body"]));
    let button = doc.push(MemoryElement::matching(&[".nightButton"]));
    Fixture { doc, body, button, night_sheet, light_sheet }
}

fn stored(value: &str) -> MemoryStore {
    let mut store = MemoryStore::default();
    store.set("nuit", value);
    store.writes = 0;
    store
}

fn assert_exclusive(f: &Fixture) {
    let night_disabled = f.doc.sheet_disabled(f.night_sheet).unwrap();
    let light_disabled = f.doc.sheet_disabled(f.light_sheet).unwrap();
    assert_ne!(night_disabled, light_disabled, "exactly one theme sheet must be enabled");
}

fn assert_applied(f: &Fixture, mode: ThemeMode) {
    assert_exclusive(f);
    let night = mode.is_night();
    assert_eq!(f.doc.sheet_disabled(f.night_sheet), Some(!night));
    assert_eq!(f.doc.sheet_disabled(f.light_sheet), Some(night));
    assert_eq!(f.doc.has_class(f.body, "night"), night);
    assert_eq!(f.doc.has_class(f.button, "pushed"), night);
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn toggled_flips_between_modes() {
    assert_eq!(ThemeMode::Day.toggled(), ThemeMode::Night);
    assert_eq!(ThemeMode::Night.toggled(), ThemeMode::Day);
}

#[test]
fn for_hour_treats_late_evening_and_early_morning_as_night() {
    for hour in [21, 22, 23, 0, 5, 8] {
        assert_eq!(ThemeMode::for_hour(hour, 21, 8), ThemeMode::Night, "hour {hour}");
    }
    for hour in [9, 12, 17, 20] {
        assert_eq!(ThemeMode::for_hour(hour, 21, 8), ThemeMode::Day, "hour {hour}");
    }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_preference_at_22_is_night() {
    let mut f = fixture();
    let store = MemoryStore::default();
    let theme = ThemeController::initialize(&mut f.doc, &store, &FixedClock(22), &ThemeConfig::default()).unwrap();
    assert_eq!(theme.mode(), ThemeMode::Night);
    assert_applied(&f, ThemeMode::Night);
}

#[test]
fn initialize_without_preference_at_noon_is_day() {
    let mut f = fixture();
    let store = MemoryStore::default();
    let theme = ThemeController::initialize(&mut f.doc, &store, &FixedClock(12), &ThemeConfig::default()).unwrap();
    assert_eq!(theme.mode(), ThemeMode::Day);
    assert_applied(&f, ThemeMode::Day);
}

#[test]
fn stored_preference_wins_over_hour() {
    let mut f = fixture();
    let theme =
        ThemeController::initialize(&mut f.doc, &stored("false"), &FixedClock(23), &ThemeConfig::default()).unwrap();
    assert_eq!(theme.mode(), ThemeMode::Day);
    assert_applied(&f, ThemeMode::Day);

    let mut f = fixture();
    let theme =
        ThemeController::initialize(&mut f.doc, &stored("true"), &FixedClock(12), &ThemeConfig::default()).unwrap();
    assert_eq!(theme.mode(), ThemeMode::Night);
    assert_applied(&f, ThemeMode::Night);
}

#[test]
fn malformed_preference_falls_back_to_hour() {
    let mut f = fixture();
    let theme =
        ThemeController::initialize(&mut f.doc, &stored("null"), &FixedClock(2), &ThemeConfig::default()).unwrap();
    assert_eq!(theme.mode(), ThemeMode::Night);
}

#[test]
fn initialize_never_writes_preference() {
    let mut f = fixture();
    let store = stored("true");
    ThemeController::initialize(&mut f.doc, &store, &FixedClock(12), &ThemeConfig::default()).unwrap();
    assert_eq!(store.writes, 0);

    let mut f = fixture();
    let store = MemoryStore::default();
    ThemeController::initialize(&mut f.doc, &store, &FixedClock(22), &ThemeConfig::default()).unwrap();
    assert!(store.entries.is_empty());
}

#[test]
fn initialize_reports_missing_style_sheet() {
    let mut doc = MemoryDocument::new();
    doc.push_sheet(Some("/assets/css/vendor/github.css"));
    let store = MemoryStore::default();
    let result = ThemeController::initialize(&mut doc, &store, &FixedClock(12), &ThemeConfig::default());
    assert_eq!(
        result.err(),
        Some(PageError::StyleResourceNotFound { needle: "assets/css/vendor/obsidian.css".into() })
    );
    assert_eq!(doc.sheet_disabled(0), Some(false));
}

#[test]
fn initialize_repairs_both_enabled_sheets() {
    let mut f = fixture();
    assert_eq!(f.doc.sheet_disabled(f.night_sheet), Some(false));
    assert_eq!(f.doc.sheet_disabled(f.light_sheet), Some(false));
    ThemeController::initialize(&mut f.doc, &MemoryStore::default(), &FixedClock(12), &ThemeConfig::default())
        .unwrap();
    assert_exclusive(&f);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_exactly_one_sheet_each_way_and_persists() {
    let mut f = fixture();
    let mut store = MemoryStore::default();
    let mut theme = ThemeController::initialize(&mut f.doc, &store, &FixedClock(12), &ThemeConfig::default()).unwrap();

    assert_eq!(theme.toggle(&mut f.doc, &mut store), ThemeMode::Night);
    assert_applied(&f, ThemeMode::Night);
    assert!(theme.night_sheet().enabled());
    assert!(!theme.light_sheet().enabled());
    assert_eq!(store.get("nuit").as_deref(), Some("true"));

    assert_eq!(theme.toggle(&mut f.doc, &mut store), ThemeMode::Day);
    assert_applied(&f, ThemeMode::Day);
    assert_eq!(store.get("nuit").as_deref(), Some("false"));
    assert_eq!(store.writes, 2);
}

#[test]
fn double_toggle_restores_mode_and_flags() {
    let mut f = fixture();
    let mut store = MemoryStore::default();
    let mut theme = ThemeController::initialize(&mut f.doc, &store, &FixedClock(22), &ThemeConfig::default()).unwrap();
    let before = (f.doc.sheet_disabled(f.night_sheet), f.doc.sheet_disabled(f.light_sheet));

    theme.toggle(&mut f.doc, &mut store);
    assert_exclusive(&f);
    theme.toggle(&mut f.doc, &mut store);

    assert_eq!(theme.mode(), ThemeMode::Night);
    assert_eq!((f.doc.sheet_disabled(f.night_sheet), f.doc.sheet_disabled(f.light_sheet)), before);
    assert_applied(&f, ThemeMode::Night);
}

#[test]
fn toggle_follows_sheets_after_a_sheet_is_inserted_ahead() {
    let mut f = fixture();
    let mut store = MemoryStore::default();
    let mut theme = ThemeController::initialize(&mut f.doc, &store, &FixedClock(12), &ThemeConfig::default()).unwrap();
    assert_applied(&f, ThemeMode::Day);

    // A late-loading sheet shifts every existing sheet one position down.
    let late = f.doc.insert_sheet(0, Some("https://docs.test/late.css"));
    let style = f.doc.sheets[1].id;

    assert_eq!(theme.toggle(&mut f.doc, &mut store), ThemeMode::Night);
    assert_applied(&f, ThemeMode::Night);
    assert_eq!(f.doc.sheet_disabled(late), Some(false));
    assert_eq!(f.doc.sheet_disabled(style), Some(false));

    assert_eq!(theme.toggle(&mut f.doc, &mut store), ThemeMode::Day);
    assert_applied(&f, ThemeMode::Day);
    assert_eq!(f.doc.sheet_disabled(late), Some(false));
}

#[test]
fn custom_config_drives_key_and_classes() {
    let mut f = fixture();
    let config = ThemeConfig { storage_key: "dark".into(), marker_class: "is-dark".into(), ..ThemeConfig::default() };
    let mut store = MemoryStore::default();
    let mut theme = ThemeController::initialize(&mut f.doc, &store, &FixedClock(12), &config).unwrap();
    theme.toggle(&mut f.doc, &mut store);
    assert!(f.doc.has_class(f.body, "is-dark"));
    assert!(!f.doc.has_class(f.body, "night"));
    assert_eq!(store.get("dark").as_deref(), Some("true"));
}
