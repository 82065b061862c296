use crate::core::{section_for_digit, PageState, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    page: &Rc<RefCell<PageState>>,
    scene: &Rc<RefCell<Scene>>,
) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if let Some(section) = section_for_digit(&key) {
        super::scroll::scroll_to_section(section);
        ev.prevent_default();
        return;
    }
    match key.as_str() {
        "e" | "E" => {
            super::scroll::toggle_exploded(page);
            ev.prevent_default();
        }
        "r" | "R" => {
            scene.borrow_mut().orbit.reset();
            log::info!("[input] orbit reset");
        }
        _ => {}
    }
}

pub fn wire_global_keydown(page: Rc<RefCell<PageState>>, scene: Rc<RefCell<Scene>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &page, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
