use super::ListenerSet;
use crate::constants::{LEAVE_EVENT, POINTER_EVENTS};
use crate::input;
use backdrop_core::InputBridge;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window pointer events into `bridge`, in the canvas' CSS pixel space.
/// Listening on the window keeps the canvas itself `pointer-events: none`.
pub fn wire_pointer(
    listeners: &mut ListenerSet,
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    bridge: &InputBridge,
) -> anyhow::Result<()> {
    for event in POINTER_EVENTS {
        let canvas = canvas.clone();
        let bridge = bridge.clone();
        listeners.add(window, event, move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let pos = input::pointer_local_px(ev, &canvas);
            match event {
                "pointermove" => bridge.pointer_move(pos.x, pos.y),
                "pointerdown" => {
                    bridge.pointer_move(pos.x, pos.y);
                    bridge.pointer_down();
                }
                "pointerup" | "pointercancel" => bridge.pointer_up(),
                "click" => bridge.click(pos.x, pos.y),
                _ => {}
            }
        })?;
    }
    if let Some(root) = document.document_element() {
        let bridge = bridge.clone();
        listeners.add(&root, LEAVE_EVENT, move |_| bridge.pointer_leave())?;
    }
    Ok(())
}
