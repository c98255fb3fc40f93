use glam::Vec2;
use web_sys as web;

/// Map a client-space point into the canvas' CSS pixel space. `logical` is the
/// size the effect works in; `rect_size` what layout reports for the element.
#[inline]
pub fn client_to_local(client: Vec2, rect_origin: Vec2, rect_size: Vec2, logical: Vec2) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local * logical / rect_size
    } else {
        local
    }
}

/// Clamp the device pixel ratio into `[1, max]`; browsers may report 0 or NaN
/// while a window is being moved between screens.
#[inline]
pub fn effective_dpr(dpr: f64, max: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.clamp(1.0, max.max(1.0))
    } else {
        1.0
    }
}

/// Backing store size for a CSS-sized canvas, never below 1x1.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let w = (css_w.max(0.0) * dpr).round() as u32;
    let h = (css_h.max(0.0) * dpr).round() as u32;
    (w.max(1), h.max(1))
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_local_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let size = Vec2::new(rect.width() as f32, rect.height() as f32);
    client_to_local(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        size,
        size,
    )
}
