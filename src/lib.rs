#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, LOG_LEVEL_ATTR, MODEL_ATTR};
use crate::core::{PageConfig, PageState, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Options from the canvas data attributes; defaults when the page has no
/// canvas yet.
fn read_page_config() -> PageConfig {
    let Some(document) = dom::window_document() else {
        return PageConfig::default();
    };
    let model = dom::data_attribute(&document, CANVAS_ID, MODEL_ATTR);
    let level = dom::data_attribute(&document, CANVAS_ID, LOG_LEVEL_ATTR);
    PageConfig::from_attributes(model.as_deref(), level.as_deref())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = read_page_config();
    console_log::init_with_level(config.log_level).ok();
    log::info!("assembly-folio starting");

    spawn_local(async move {
        if let Err(e) = init(config).await {
            log::error!("init error: {:#}", e);
        }
    });
    Ok(())
}

async fn init(config: PageConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;

    overlay::show_loading(&document);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Page state is live before the model loads so scrolling works immediately
    let page = Rc::new(RefCell::new(PageState::default()));
    events::wire_scroll_tracking(page.clone());
    events::wire_nav_dots(&document);
    events::wire_explode_toggle(&document, page.clone());

    let parts = assets::load_assembly(config.model_url.as_deref()).await;
    let scene = Rc::new(RefCell::new(Scene::new(parts)));
    log::info!(
        "[scene] {} parts, section {}",
        scene.borrow().assembly.len(),
        page.borrow().scroll.section().title()
    );

    // ---------------- Interaction state ----------------
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));

    events::wire_global_keydown(page.clone(), scene.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        mouse_state: mouse_state.clone(),
        drag_state: drag_state.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    overlay::hide_loading(&document);
    if gpu.is_none() {
        log::warn!("[gpu] no renderer; page runs without the 3D view");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        page,
        scene,
        document,
        canvas,
        mouse: mouse_state,
        drag: drag_state,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
