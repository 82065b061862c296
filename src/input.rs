use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
}

/// Orbit drag in progress on the canvas.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
    pub travelled: f32,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        *self = Self {
            active: true,
            pointer_id,
            last: at,
            travelled: 0.0,
        };
    }

    /// True while a press has travelled at least `threshold_px`.
    pub fn is_dragging(&self, threshold_px: f32) -> bool {
        self.active && self.travelled >= threshold_px
    }

    /// Record a move; returns the delta since the last one.
    pub fn advance(&mut self, to: Vec2) -> Vec2 {
        let d = to - self.last;
        self.last = to;
        self.travelled += d.length();
        d
    }
}

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Convert backing-store pixels back to CSS pixels relative to the viewport.
#[inline]
pub fn canvas_px_to_client(canvas: &web::HtmlCanvasElement, px: f32, py: f32) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let w = canvas.width().max(1) as f32;
    let h = canvas.height().max(1) as f32;
    (
        rect.left() as f32 + px / w * rect.width() as f32,
        rect.top() as f32 + py / h * rect.height() as f32,
    )
}

#[inline]
pub fn within_canvas(canvas: &web::HtmlCanvasElement, p: Vec2) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && p.x <= canvas.width() as f32 && p.y <= canvas.height() as f32
}
