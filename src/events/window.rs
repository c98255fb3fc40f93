use super::ListenerSet;
use crate::constants::RESIZE_EVENT;
use crate::dom;
use backdrop_core::Viewport;
use web_sys as web;

/// Resync the backing store on window resize and hand the new CSS size to the
/// scheduler, which applies it before the next frame.
pub fn wire_resize(
    listeners: &mut ListenerSet,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    viewport: &Viewport,
) -> anyhow::Result<()> {
    let canvas = canvas.clone();
    let viewport = viewport.clone();
    listeners.add(window, RESIZE_EVENT, move |_| {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        viewport.request(w, h);
    })
}
