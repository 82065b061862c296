use crate::constants::{DRAG_THRESHOLD_PX, MAX_FRAME_DT_SEC};
use crate::core::{PageState, Scene};
use crate::input;
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub page: Rc<RefCell<PageState>>,
    pub scene: Rc<RefCell<Scene>>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub drag: Rc<RefCell<input::DragState>>,

    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        let width = self.canvas.width();
        let height = self.canvas.height();

        {
            let page = self.page.borrow();
            self.scene.borrow_mut().tick(&page, dt_sec);
        }
        self.update_hover(width as f32, height as f32);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            let scene = self.scene.borrow();
            let camera = scene.camera(g.aspect());
            let hovered = self.page.borrow().hovered;
            match g.render(&camera, &scene.assembly, hovered) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::debug!("[gpu] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }

    /// Pick the part under the pointer and float its label.
    fn update_hover(&mut self, width: f32, height: f32) {
        let ms = *self.mouse.borrow();
        let dragging = self.drag.borrow().is_dragging(DRAG_THRESHOLD_PX);
        let scene = self.scene.borrow();
        let hovered = if ms.inside && !dragging {
            scene.pick(ms.x, ms.y, width, height)
        } else {
            None
        };
        if self.page.borrow_mut().set_hovered(hovered) {
            match hovered {
                Some(i) => log::debug!(
                    "[hover] {}",
                    scene.assembly.specs().get(i).map_or("?", |s| s.name.as_str())
                ),
                None => log::debug!("[hover] none"),
            }
        }

        let label = hovered.and_then(|i| {
            let (px, py) = scene.label_anchor(i, width, height)?;
            Some((scene.hover_label(i)?, px, py))
        });
        match label {
            Some((text, px, py)) => {
                let (x, y) = input::canvas_px_to_client(&self.canvas, px, py);
                overlay::show_part_label(&self.document, &text, x, y);
            }
            None => overlay::hide_part_label(&self.document),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:#}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
