//! Browser host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Real implementations of the page capabilities over `web-sys`, the event
//! listener wiring, and the wasm entry point. Everything here is thin glue:
//! decisions are made by [`crate::page::Page`], this module only performs
//! the [`crate::page::Action`]s it returns.

pub mod boot;
pub mod clock;
pub mod dom;
pub mod scroll;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::error::PageError;
use crate::page::Page;

pub type BrowserPage = Page<dom::BrowserDocument, storage::LocalStorage>;

/// Page state shared by every listener on the UI thread.
pub type SharedPage = Rc<RefCell<BrowserPage>>;

/// Run `f` against the page unless another handler currently holds it.
pub fn with_page<R>(page: &SharedPage, f: impl FnOnce(&mut BrowserPage) -> R) -> Option<R> {
    match page.try_borrow_mut() {
        Ok(mut page) => Some(f(&mut page)),
        Err(_) => {
            log::warn!("page busy; event dropped");
            None
        }
    }
}

/// Unwrap a DOM call result, logging the failure.
pub(crate) fn logged<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{}", PageError::Dom(format!("{what}: {e:?}")));
            None
        }
    }
}
