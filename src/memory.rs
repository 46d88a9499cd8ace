//! In-memory implementations of the page capabilities.
//!
//! `MemoryDocument` models just enough of a document for the page logic:
//! elements answer to the selectors they were registered with plus `.class`
//! and `#id` forms, offsets are plain numbers, and removed elements stay in
//! the arena so node handles remain valid.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::gateway::{Clock, DocumentGateway, StyleSheetInfo};
use crate::preference::PreferenceStore;

/// Index into [`MemoryDocument::elements`].
pub type NodeId = usize;

/// Stable style sheet handle; unrelated to the sheet's list position.
pub type SheetId = usize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    /// Selectors this element matches besides its classes and id.
    pub selectors: Vec<String>,
    pub text: String,
    pub id: Option<String>,
    pub offset_top: f64,
    pub classes: BTreeSet<String>,
    pub style: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub parent: Option<NodeId>,
    pub removed: bool,
}

impl MemoryElement {
    #[must_use]
    pub fn matching(selectors: &[&str]) -> Self {
        Self { selectors: selectors.iter().map(|s| (*s).to_owned()).collect(), ..Self::default() }
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    #[must_use]
    pub fn at(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    fn matches(&self, selector: &str) -> bool {
        if self.removed {
            return false;
        }
        if self.selectors.iter().any(|s| s == selector) {
            return true;
        }
        if let Some(class) = selector.strip_prefix('.') {
            return self.classes.contains(class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return self.id.as_deref() == Some(id);
        }
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStyleSheet {
    pub id: SheetId,
    pub href: Option<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pub elements: Vec<MemoryElement>,
    /// Sheets in document order.
    pub sheets: Vec<MemoryStyleSheet>,
    next_sheet_id: SheetId,
    pub scroll_top: f64,
    pub fragment: String,
    /// Every `set_fragment` call, oldest first.
    pub fragment_history: Vec<String>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element and return its handle.
    pub fn push(&mut self, element: MemoryElement) -> NodeId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Register a loaded style sheet at the end of the list; it starts enabled.
    pub fn push_sheet(&mut self, href: Option<&str>) -> SheetId {
        self.insert_sheet(self.sheets.len(), href)
    }

    /// Register a style sheet at `position`, shifting later sheets down the
    /// list. Positions past the end append.
    pub fn insert_sheet(&mut self, position: usize, href: Option<&str>) -> SheetId {
        let id = self.next_sheet_id;
        self.next_sheet_id += 1;
        let sheet = MemoryStyleSheet { id, href: href.map(str::to_owned), disabled: false };
        self.sheets.insert(position.min(self.sheets.len()), sheet);
        id
    }

    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&MemoryElement> {
        self.elements.get(node)
    }

    /// Live elements whose parent is `node`.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<&MemoryElement> {
        self.elements.iter().filter(|e| !e.removed && e.parent == Some(node)).collect()
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.classes.contains(class))
    }

    #[must_use]
    pub fn sheet_disabled(&self, id: SheetId) -> Option<bool> {
        self.sheets.iter().find(|s| s.id == id).map(|s| s.disabled)
    }

    fn matching_mut(&mut self, selector: &str) -> impl Iterator<Item = &mut MemoryElement> {
        self.elements.iter_mut().filter(move |e| e.matches(selector))
    }
}

impl DocumentGateway for MemoryDocument {
    type Node = NodeId;
    type Sheet = SheetId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.elements.iter().position(|e| e.matches(selector))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(selector))
            .map(|(i, _)| i)
            .collect()
    }

    fn text_content(&self, node: &NodeId) -> String {
        self.element(*node).map(|e| e.text.clone()).unwrap_or_default()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let element = self.element(*node)?;
        if name == "id" {
            return element.id.clone();
        }
        element.attributes.get(name).cloned()
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.element(*node).map_or(0.0, |e| e.offset_top)
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_id(&mut self, node: &NodeId, id: &str) {
        if let Some(element) = self.elements.get_mut(*node) {
            element.id = Some(id.to_owned());
        }
    }

    fn set_class_all(&mut self, selector: &str, class: &str, on: bool) {
        for element in self.matching_mut(selector) {
            if on {
                element.classes.insert(class.to_owned());
            } else {
                element.classes.remove(class);
            }
        }
    }

    fn set_style_all(&mut self, selector: &str, property: &str, value: &str) {
        for element in self.matching_mut(selector) {
            element.style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn append_span(&mut self, node: &NodeId, class: &str, text: &str) {
        let mut span = MemoryElement::matching(&["span"]).with_text(text);
        span.classes.insert(class.to_owned());
        span.parent = Some(*node);
        self.elements.push(span);
    }

    fn remove_all(&mut self, selector: &str) {
        for element in self.matching_mut(selector) {
            element.removed = true;
        }
    }

    fn set_scroll_top(&mut self, offset: f64) {
        self.scroll_top = offset;
    }

    fn set_fragment(&mut self, id: &str) {
        self.fragment = id.to_owned();
        self.fragment_history.push(id.to_owned());
    }

    fn style_sheets(&self) -> Vec<StyleSheetInfo<SheetId>> {
        self.sheets
            .iter()
            .map(|s| StyleSheetInfo { sheet: s.id, href: s.href.clone(), disabled: s.disabled })
            .collect()
    }

    fn set_style_sheet_disabled(&mut self, sheet: &SheetId, disabled: bool) {
        if let Some(entry) = self.sheets.iter_mut().find(|s| s.id == *sheet) {
            entry.disabled = disabled;
        }
    }
}

/// Key/value store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub entries: HashMap<String, String>,
    /// Number of `set` calls made.
    pub writes: usize,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Clock frozen at a given local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.0
    }
}
