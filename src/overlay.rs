use crate::constants::{
    EXPLODE_TOGGLE_ID, LOADING_OVERLAY_ID, NAV_ACTIVE_CLASS, NAV_DOT_PREFIX, PART_LABEL_ID,
};
use crate::core::SECTION_COUNT;
use web_sys as web;

#[inline]
fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    } else {
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn show_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        set_hidden(&el, false);
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        set_hidden(&el, true);
    }
}

/// Float the part label at pixel (`x`, `y`) of the canvas.
pub fn show_part_label(document: &web::Document, text: &str, x: f32, y: f32) {
    if let Some(el) = document.get_element_by_id(PART_LABEL_ID) {
        el.set_text_content(Some(text));
        _ = el.class_list().remove_1("hidden");
        let style = format!(
            "position:fixed;left:{:.0}px;top:{:.0}px;transform:translate(-50%,-50%);pointer-events:none",
            x, y
        );
        _ = el.set_attribute("style", &style);
    }
}

pub fn hide_part_label(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PART_LABEL_ID) {
        set_hidden(&el, true);
    }
}

/// Mark the nav dot of `active` as current.
pub fn set_active_nav(document: &web::Document, active: usize) {
    for i in 0..SECTION_COUNT {
        let id = format!("{NAV_DOT_PREFIX}{i}");
        if let Some(el) = document.get_element_by_id(&id) {
            _ = el
                .class_list()
                .toggle_with_force(NAV_ACTIVE_CLASS, i == active);
            _ = el.set_attribute("aria-current", if i == active { "true" } else { "false" });
        }
    }
}

pub fn set_explode_pressed(document: &web::Document, pressed: bool) {
    if let Some(el) = document.get_element_by_id(EXPLODE_TOGGLE_ID) {
        _ = el.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
    }
}
