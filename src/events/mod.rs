//! DOM listener wiring for a mounted backdrop.
//!
//! Closures are kept in a [`ListenerSet`] instead of being leaked with
//! `forget()`, so unmounting detaches everything that was attached.

mod pointer;
mod window;

pub use pointer::wire_pointer;
pub use window::wire_resize;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, Handler)>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        f: F,
    ) -> anyhow::Result<()>
    where
        F: FnMut(web::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({event}) failed: {:?}", e))?;
        self.entries.push((target.clone(), event, closure));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn remove_all(&mut self) {
        for (target, event, closure) in self.entries.drain(..) {
            _ = target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.remove_all();
    }
}
