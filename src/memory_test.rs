use super::*;

#[test]
fn elements_match_registered_class_and_id_selectors() {
    let mut doc = MemoryDocument::new();
    let h = doc.push(MemoryElement::matching(&["#main_text h2"]).with_text("Intro"));
    doc.set_id(&h, "intro");
    doc.set_class_all("#main_text h2", "pushed", true);

    assert_eq!(doc.query("#main_text h2"), Some(h));
    assert_eq!(doc.query("#intro"), Some(h));
    assert_eq!(doc.query(".pushed"), Some(h));
    assert_eq!(doc.query("footer"), None);
}

#[test]
fn appended_spans_are_children_and_removable() {
    let mut doc = MemoryDocument::new();
    let h = doc.push(MemoryElement::matching(&["h2"]));
    doc.append_span(&h, "permalink", "link");
    assert_eq!(doc.children(h).len(), 1);
    assert_eq!(doc.query_all(".permalink").len(), 1);

    doc.remove_all(".permalink");
    assert!(doc.children(h).is_empty());
    assert!(doc.query_all(".permalink").is_empty());
}

#[test]
fn style_sheets_report_handle_and_disabled_flag() {
    let mut doc = MemoryDocument::new();
    doc.push_sheet(Some("a.css"));
    doc.push_sheet(None);
    doc.set_style_sheet_disabled(&1, true);

    let sheets = doc.style_sheets();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].href.as_deref(), Some("a.css"));
    assert!(!sheets[0].disabled);
    assert_eq!(sheets[1].sheet, 1);
    assert!(sheets[1].disabled);
}

#[test]
fn store_counts_writes() {
    let mut store = MemoryStore::default();
    store.set("k", "v");
    store.set("k", "w");
    assert_eq!(store.get("k").as_deref(), Some("w"));
    assert_eq!(store.writes, 2);
}

#[test]
fn inserted_sheet_shifts_positions_but_not_handles() {
    let mut doc = MemoryDocument::new();
    let first = doc.push_sheet(Some("a.css"));
    let second = doc.push_sheet(Some("b.css"));
    let late = doc.insert_sheet(0, Some("late.css"));
    doc.set_style_sheet_disabled(&second, true);

    let hrefs: Vec<_> = doc.style_sheets().into_iter().map(|s| s.href).collect();
    assert_eq!(hrefs, vec![Some("late.css".into()), Some("a.css".into()), Some("b.css".into())]);
    assert_eq!(doc.sheet_disabled(first), Some(false));
    assert_eq!(doc.sheet_disabled(second), Some(true));
    assert_eq!(doc.sheet_disabled(late), Some(false));
}
