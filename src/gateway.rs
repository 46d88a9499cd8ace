//! Capability traits over the host document and clock.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page components never touch `window` or `document` directly. They go
//! through these narrow traits so the same logic runs against the live DOM
//! (`web::dom::BrowserDocument`) and against [`crate::memory`] in tests.

/// A loaded style sheet as seen in the document's sheet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheetInfo<S> {
    /// Live handle; stays valid when other sheets are added or removed.
    pub sheet: S,
    /// Source path; `None` for inline `<style>` blocks.
    pub href: Option<String>,
    pub disabled: bool,
}

/// Read/write access to the host document.
///
/// Selector arguments use CSS selector syntax. Every mutation is applied
/// synchronously, so a sequence of calls made from one event handler is
/// rendered as a single update.
pub trait DocumentGateway {
    /// Handle to a live element. Not owned by the caller.
    type Node: Clone + PartialEq;
    /// Handle to a loaded style sheet.
    type Sheet: Clone;

    // --- Queries ---

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn text_content(&self, node: &Self::Node) -> String;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Distance from the document top to the element's top edge.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// Current vertical scroll offset of the document.
    fn scroll_top(&self) -> f64;

    // --- Mutations ---

    fn set_id(&mut self, node: &Self::Node, id: &str);
    fn set_class_all(&mut self, selector: &str, class: &str, on: bool);
    fn set_style_all(&mut self, selector: &str, property: &str, value: &str);

    /// Append a `<span class="{class}">{text}</span>` to `node`.
    fn append_span(&mut self, node: &Self::Node, class: &str, text: &str);
    fn remove_all(&mut self, selector: &str);

    fn set_scroll_top(&mut self, offset: f64);

    /// Replace the URL fragment without scrolling. An empty id clears it.
    fn set_fragment(&mut self, id: &str);

    // --- Style sheets ---

    fn style_sheets(&self) -> Vec<StyleSheetInfo<Self::Sheet>>;
    fn set_style_sheet_disabled(&mut self, sheet: &Self::Sheet, disabled: bool);
}

/// Source of local wall-clock time.
pub trait Clock {
    /// Current local hour, `0..=23`.
    fn local_hour(&self) -> u32;
}
