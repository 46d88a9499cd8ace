use super::*;
use crate::memory::{MemoryDocument, MemoryElement};

fn setup() -> (MemoryDocument, usize, usize, PermalinkUi) {
    let mut doc = MemoryDocument::new();
    let a = doc.push(MemoryElement::matching(&["h2"]).with_text("A"));
    let b = doc.push(MemoryElement::matching(&["h2"]).with_text("B"));
    (doc, a, b, PermalinkUi::new(&PermalinkConfig::default()))
}

#[test]
fn enter_appends_hidden_affordance_and_schedules_reveal() {
    let (mut doc, a, _, mut ui) = setup();
    let reveal = ui.on_enter(&mut doc, &a);

    assert_eq!(reveal.delay_ms, 600);
    let children = doc.children(a);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].text, "Lien permanent");
    assert!(children[0].classes.contains("permalink"));
    assert!(!children[0].classes.contains("appear"));
}

#[test]
fn reveal_marks_affordance_visible() {
    let (mut doc, a, _, mut ui) = setup();
    let reveal = ui.on_enter(&mut doc, &a);
    assert!(ui.on_reveal(&mut doc, reveal.ticket));
    assert!(doc.children(a)[0].classes.contains("appear"));
    // The ticket is spent once revealed.
    assert!(!ui.on_reveal(&mut doc, reveal.ticket));
}

#[test]
fn leave_removes_affordance_immediately() {
    let (mut doc, a, _, mut ui) = setup();
    let reveal = ui.on_enter(&mut doc, &a);
    ui.on_reveal(&mut doc, reveal.ticket);
    ui.on_leave(&mut doc);
    assert!(doc.children(a).is_empty());
    assert!(doc.query_all(".permalink").is_empty());
}

#[test]
fn leave_mid_delay_cancels_reveal() {
    let (mut doc, a, _, mut ui) = setup();
    let reveal = ui.on_enter(&mut doc, &a);
    ui.on_leave(&mut doc);

    assert!(!ui.on_reveal(&mut doc, reveal.ticket));
    assert!(doc.query_all(".appear").is_empty());
    assert!(doc.query_all(".permalink").is_empty());
}

#[test]
fn stale_ticket_from_previous_heading_is_ignored() {
    let (mut doc, a, b, mut ui) = setup();
    let first = ui.on_enter(&mut doc, &a);
    ui.on_leave(&mut doc);
    let second = ui.on_enter(&mut doc, &b);

    assert!(!ui.on_reveal(&mut doc, first.ticket));
    assert!(!doc.children(b)[0].classes.contains("appear"));
    assert!(ui.on_reveal(&mut doc, second.ticket));
    assert!(doc.children(b)[0].classes.contains("appear"));
}

#[test]
fn custom_label_and_class_are_used() {
    let mut doc = MemoryDocument::new();
    let h = doc.push(MemoryElement::matching(&["h2"]));
    let config = PermalinkConfig { class: "anchor".into(), label: "#".into(), ..PermalinkConfig::default() };
    let mut ui = PermalinkUi::new(&config);
    ui.on_enter(&mut doc, &h);
    assert_eq!(doc.query_all(".anchor").len(), 1);
    ui.on_leave(&mut doc);
    assert!(doc.query_all(".anchor").is_empty());
}
