//! Wasm entry point and DOM event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Event, EventTarget, KeyboardEvent};

use super::clock::LocalClock;
use super::dom::BrowserDocument;
use super::storage::LocalStorage;
use super::{SharedPage, scroll, with_page};
use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::gateway::DocumentGateway;
use crate::keys::{KeyBindingDispatcher, key_from_code};
use crate::page::{Action, Page};

/// Runs on module instantiation; mounts once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {e}");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_| mount());
    } else {
        mount();
    }
}

fn mount() {
    let doc = match BrowserDocument::from_window() {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("cannot mount page enhancements: {e}");
            return;
        }
    };
    let config = load_config(&doc);
    let store = LocalStorage::open(doc.window());
    let page: SharedPage = Rc::new(RefCell::new(Page::boot(doc, store, &LocalClock, config)));
    install_listeners(&page);
}

/// Read the embedded JSON config, falling back to defaults.
fn load_config(doc: &BrowserDocument) -> PageConfig {
    let Some(element) = doc.query(&format!("#{CONFIG_ELEMENT_ID}")) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&doc.text_content(&element)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using defaults");
            PageConfig::default()
        }
    }
}

fn listen(target: &EventTarget, name: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
        log::warn!("cannot listen for {name}: {e:?}");
    }
    closure.forget();
}

fn run_actions(page: &SharedPage, actions: Vec<Action>, event: &Event) {
    for action in actions {
        match action {
            Action::SuppressDefault => event.prevent_default(),
            Action::AnimateScroll(request) => scroll::animate(page, request),
            Action::ScheduleReveal { ticket, delay_ms } => {
                let page = Rc::clone(page);
                Timeout::new(delay_ms, move || {
                    with_page(&page, |p| p.on_reveal_timer(ticket));
                })
                .forget();
            }
        }
    }
}

/// Handler that feeds the event to `page` and performs the returned actions.
fn handler(
    page: &SharedPage,
    mut f: impl FnMut(&mut super::BrowserPage, &Event) -> Vec<Action> + 'static,
) -> impl FnMut(Event) + 'static {
    let page = Rc::clone(page);
    move |event: Event| {
        let actions = with_page(&page, |p| f(p, &event)).unwrap_or_default();
        run_actions(&page, actions, &event);
    }
}

fn install_listeners(page: &SharedPage) {
    let Some((window, document, headings, toggles, links)) = with_page(page, |p| {
        let selectors = &p.config().selectors;
        (
            p.doc.window().clone(),
            p.doc.document().clone(),
            p.headings().iter().map(|entry| entry.node.clone()).collect::<Vec<_>>(),
            p.doc.query_all(&p.config().theme.toggle_selector),
            p.doc.query_all(&selectors.smooth_links),
        )
    }) else {
        return;
    };

    listen(&window, "scroll", handler(page, |p, _| {
        p.on_scroll();
        Vec::new()
    }));

    // Default suppression is applied before borrowing the page and holds
    // even when the page is busy.
    let keys = KeyBindingDispatcher::new();
    let shared = Rc::clone(page);
    listen(&document, "keyup", move |event: Event| {
        let key = event.dyn_ref::<KeyboardEvent>().and_then(|e| key_from_code(e.key_code()));
        let outcome = keys.dispatch(key);
        if outcome.suppress_default {
            event.prevent_default();
        }
        let Some(command) = outcome.command else {
            return;
        };
        let actions = with_page(&shared, |p| p.on_command(command)).unwrap_or_default();
        run_actions(&shared, actions, &event);
    });

    for heading in headings {
        let node = heading.clone();
        listen(&heading, "mouseenter", handler(page, move |p, _| p.on_heading_enter(&node)));
        listen(&heading, "mouseleave", handler(page, |p, _| {
            p.on_heading_leave();
            Vec::new()
        }));
        let node = heading.clone();
        listen(&heading, "click", handler(page, move |p, _| p.on_heading_click(&node)));
    }

    for toggle in toggles {
        listen(&toggle, "click", handler(page, |p, _| p.on_night_toggle_click()));
    }

    for link in links {
        let node = link.clone();
        listen(&link, "click", handler(page, move |p, _| p.on_smooth_link_click(&node)));
    }

    log::debug!("event listeners installed");
}
