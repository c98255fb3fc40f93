use backdrop_core::FramePacer;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// The frame currently requested from the browser, if any.
struct Pending {
    handle: i32,
    resolve: js_sys::Function,
    _callback: Closure<dyn FnMut(f64)>,
}

type Slot = Rc<RefCell<Option<Pending>>>;

/// `requestAnimationFrame` as a [`FramePacer`]: each `next_frame` requests one
/// callback and resolves with its timestamp.
pub struct RafPacer {
    window: web::Window,
    pending: Slot,
}

/// Cancels whatever frame a [`RafPacer`] is waiting on and wakes the loop
/// with `None`, so it exits without another `step`.
#[derive(Clone)]
pub struct RafCanceller {
    window: web::Window,
    pending: Slot,
}

impl RafPacer {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn canceller(&self) -> RafCanceller {
        RafCanceller {
            window: self.window.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl FramePacer for RafPacer {
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>> {
        let window = self.window.clone();
        let pending = self.pending.clone();
        async move {
            let slot = pending.clone();
            let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject| {
                let wake = resolve.clone();
                let callback: Closure<dyn FnMut(f64)> = Closure::once(move |ts: f64| {
                    _ = wake.call1(&JsValue::NULL, &JsValue::from_f64(ts));
                });
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(handle) => {
                        *slot.borrow_mut() = Some(Pending {
                            handle,
                            resolve,
                            _callback: callback,
                        });
                    }
                    Err(e) => {
                        log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                        _ = resolve.call1(&JsValue::NULL, &JsValue::NULL);
                    }
                }
            });
            let ts = JsFuture::from(promise).await.ok()?;
            pending.borrow_mut().take();
            ts.as_f64()
        }
    }
}

impl RafCanceller {
    pub fn cancel(&self) {
        let Some(p) = self.pending.borrow_mut().take() else {
            return;
        };
        _ = self.window.cancel_animation_frame(p.handle);
        _ = p.resolve.call1(&JsValue::NULL, &JsValue::NULL);
    }
}
