use crate::constants::{EXPLODE_TOGGLE_ID, NAV_DOT_PREFIX};
use crate::core::{section_scroll_top, PageState, SECTION_COUNT};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Recompute scroll state from the live window and sync the nav dots.
pub fn refresh_scroll_state(window: &web::Window, page: &Rc<RefCell<PageState>>) {
    let (top, doc_h, view_h) = dom::scroll_geometry(window);
    let changed = page.borrow_mut().update_scroll(top, doc_h, view_h);
    if let Some(section) = changed {
        log::debug!(
            "[scroll] section {} ({}) progress={:.3}",
            section.index(),
            section.title(),
            page.borrow().scroll.progress
        );
        if let Some(document) = window.document() {
            overlay::set_active_nav(&document, section.index());
        }
    }
}

/// Track scroll and resize events; runs once immediately so the state is
/// valid before the first frame.
pub fn wire_scroll_tracking(page: Rc<RefCell<PageState>>) {
    let Some(window) = web::window() else {
        return;
    };
    refresh_scroll_state(&window, &page);
    if let Some(document) = window.document() {
        overlay::set_active_nav(&document, page.borrow().scroll.section_index);
    }

    let page_cb = page.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            refresh_scroll_state(&w, &page_cb);
        }
    }) as Box<dyn FnMut()>);
    for event in ["scroll", "resize"] {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Smooth-scroll so section `index` fills the viewport.
pub fn scroll_to_section(index: usize) {
    if let Some(window) = web::window() {
        let top = section_scroll_top(index, dom::viewport_height(&window));
        log::debug!("[scroll] navigate to section {} (top={:.0})", index, top);
        dom::smooth_scroll_to(&window, top);
    }
}

pub fn wire_nav_dots(document: &web::Document) {
    for i in 0..SECTION_COUNT {
        dom::add_click_listener(document, &format!("{NAV_DOT_PREFIX}{i}"), move || {
            scroll_to_section(i)
        });
    }
}

/// Flip the exploded flag and reflect it on the toggle button.
pub fn toggle_exploded(page: &Rc<RefCell<PageState>>) {
    let exploded = page.borrow_mut().toggle_exploded();
    log::info!("[input] exploded view {}", if exploded { "on" } else { "off" });
    if let Some(document) = dom::window_document() {
        overlay::set_explode_pressed(&document, exploded);
    }
}

pub fn wire_explode_toggle(document: &web::Document, page: Rc<RefCell<PageState>>) {
    overlay::set_explode_pressed(document, page.borrow().exploded);
    dom::add_click_listener(document, EXPLODE_TOGGLE_ID, move || toggle_exploded(&page));
}
