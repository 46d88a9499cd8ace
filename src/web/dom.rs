//! `DocumentGateway` over the live DOM.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, StyleSheet, Window};

use super::logged;
use crate::error::PageError;
use crate::gateway::{DocumentGateway, StyleSheetInfo};

pub struct BrowserDocument {
    window: Window,
    document: Document,
}

impl BrowserDocument {
    /// Bind to the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Dom`] outside a browser window.
    pub fn from_window() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::Dom("no window".into()))?;
        let document = window.document().ok_or_else(|| PageError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn page_url(&self) -> String {
        let location = self.window.location();
        let path = logged("read pathname", location.pathname()).unwrap_or_default();
        let search = logged("read search", location.search()).unwrap_or_default();
        format!("{path}{search}")
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                out.push(element);
            }
        }
    }
    out
}

impl DocumentGateway for BrowserDocument {
    type Node = Element;
    type Sheet = StyleSheet;

    fn query(&self, selector: &str) -> Option<Element> {
        logged(selector, self.document.query_selector(selector)).flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        logged(selector, self.document.query_selector_all(selector)).map_or_else(Vec::new, |list| elements(&list))
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.get_bounding_client_rect().top() + self.scroll_top()
    }

    fn scroll_top(&self) -> f64 {
        logged("read scroll offset", self.window.scroll_y()).unwrap_or_default()
    }

    fn set_id(&mut self, node: &Element, id: &str) {
        node.set_id(id);
    }

    fn set_class_all(&mut self, selector: &str, class: &str, on: bool) {
        for element in self.query_all(selector) {
            let classes = element.class_list();
            let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
            logged("toggle class", result);
        }
    }

    fn set_style_all(&mut self, selector: &str, property: &str, value: &str) {
        for element in self.query_all(selector) {
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                logged("set style", html.style().set_property(property, value));
            }
        }
    }

    fn append_span(&mut self, node: &Element, class: &str, text: &str) {
        let Some(span) = logged("create span", self.document.create_element("span")) else {
            return;
        };
        span.set_class_name(class);
        span.set_text_content(Some(text));
        logged("append span", node.append_child(&span));
    }

    fn remove_all(&mut self, selector: &str) {
        for element in self.query_all(selector) {
            element.remove();
        }
    }

    fn set_scroll_top(&mut self, offset: f64) {
        let x = logged("read scroll offset", self.window.scroll_x()).unwrap_or_default();
        self.window.scroll_to_with_x_and_y(x, offset);
    }

    fn set_fragment(&mut self, id: &str) {
        // pushState changes the URL without the native jump a `location.hash`
        // assignment would cause mid-animation.
        let url = if id.is_empty() { self.page_url() } else { format!("#{id}") };
        if let Some(history) = logged("open history", self.window.history()) {
            logged("set fragment", history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        }
    }

    fn style_sheets(&self) -> Vec<StyleSheetInfo<StyleSheet>> {
        let list = self.document.style_sheets();
        let mut out = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(sheet) = list.item(i) {
                out.push(StyleSheetInfo {
                    href: logged("read sheet href", sheet.href()).flatten(),
                    disabled: sheet.disabled(),
                    sheet,
                });
            }
        }
        out
    }

    fn set_style_sheet_disabled(&mut self, sheet: &StyleSheet, disabled: bool) {
        sheet.set_disabled(disabled);
    }
}
