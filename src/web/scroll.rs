//! Animated scrolling on `requestAnimationFrame`.
//!
//! Each animation re-checks its generation every frame and stops as soon as
//! a newer navigation exists, so the newest request always wins. Only a
//! completed, current animation writes the URL fragment.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::{SharedPage, with_page};
use crate::gateway::DocumentGateway;
use crate::navigator::ScrollRequest;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn now(window: &Window) -> f64 {
    window.performance().map_or_else(js_sys::Date::now, |p| p.now())
}

/// Apply the frame at `elapsed_ms`. Returns whether more frames are needed.
fn step(page: &SharedPage, request: &ScrollRequest, elapsed_ms: f64) -> bool {
    with_page(page, |page| {
        if !page.is_current_navigation(request.generation) {
            return false;
        }
        page.doc.set_scroll_top(request.position_at(elapsed_ms));
        if request.is_finished(elapsed_ms) {
            page.complete_navigation(request);
            return false;
        }
        true
    })
    .unwrap_or(true)
}

/// Animate `request` against the page's scroll position.
pub fn animate(page: &SharedPage, request: ScrollRequest) {
    let Some(window) = web_sys::window() else {
        step(page, &request, f64::from(request.duration_ms));
        return;
    };
    let started_ms = now(&window);

    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let page_for_cb = Rc::clone(page);
    let window_for_cb = window.clone();
    let request_for_cb = request.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let request = &request_for_cb;
        let elapsed_ms = now(&window_for_cb) - started_ms;
        let more = step(&page_for_cb, request, elapsed_ms);
        let requested = more
            && holder_for_cb.borrow().as_ref().is_some_and(|cb| {
                window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok()
            });
        if !requested {
            if more {
                log::warn!("animation frame request failed; jumping to {}", request.to);
                step(&page_for_cb, request, f64::from(request.duration_ms));
            }
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        step(page, &request, f64::from(request.duration_ms));
    }
}
