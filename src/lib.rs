#![cfg(target_arch = "wasm32")]
use backdrop_core::{
    CancellationToken, EffectKind, InputBridge, MountOptions, Scheduler, Stage, Viewport,
};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod surface;
mod theme;

use constants::{AUTO_MOUNT_SELECTOR, EFFECT_ATTR, SEED_ATTR};
use events::ListenerSet;
use frame::{RafCanceller, RafPacer};
use surface::CanvasSurface;
use theme::DocumentTheme;

thread_local! {
    static AUTO_MOUNTED: RefCell<Vec<Backdrop>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        if let Err(e) = auto_mount() {
            log::error!("auto-mount error: {:?}", e);
        }
    });
    Ok(())
}

fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = document
        .query_selector_all(AUTO_MOUNT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..nodes.length() {
        let Some(canvas) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            continue;
        };
        let options = match MountOptions::parse(
            canvas.get_attribute(EFFECT_ATTR).as_deref(),
            canvas.get_attribute(SEED_ATTR).as_deref(),
        ) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[mount] skipping canvas: {e}");
                continue;
            }
        };
        match Backdrop::mount_on(canvas, options) {
            Ok(b) => AUTO_MOUNTED.with(|m| m.borrow_mut().push(b)),
            Err(e) => log::warn!("[mount] {:?}", e),
        }
    }
    Ok(())
}

/// Tear down every backdrop mounted from `data-backdrop` markup.
#[wasm_bindgen]
pub fn unmount_all() {
    let mounted = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    for mut b in mounted {
        b.unmount();
    }
}

// Everything a running backdrop needs released at unmount.
struct Mounted {
    token: CancellationToken,
    canceller: Option<RafCanceller>,
    listeners: ListenerSet,
}

/// Handle to one effect running on one canvas.
#[wasm_bindgen]
pub struct Backdrop {
    kind: EffectKind,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl Backdrop {
    /// Start `effect` on the canvas with id `canvas_id`. `seed` is an optional
    /// decimal string, as in `data-backdrop-seed`.
    pub fn mount(canvas_id: &str, effect: &str, seed: Option<String>) -> Result<Backdrop, JsValue> {
        let run = || -> anyhow::Result<Backdrop> {
            let options = MountOptions::parse(Some(effect), seed.as_deref())?;
            let document =
                dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
            let canvas = dom::canvas_by_id(&document, canvas_id)?;
            Backdrop::mount_on(canvas, options)
        };
        run().map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Stop the frame loop and detach listeners. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        let Some(mut m) = self.mounted.take() else {
            return;
        };
        m.token.cancel();
        if let Some(c) = m.canceller.take() {
            c.cancel();
        }
        m.listeners.remove_all();
        log::info!("[mount] {} unmounted", self.kind);
    }

    pub fn effect_name(&self) -> String {
        self.kind.name().to_string()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

impl Backdrop {
    fn mount_on(canvas: web::HtmlCanvasElement, options: MountOptions) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let (width, height) = dom::sync_canvas_backing_size(&canvas);
        let surface = dom::context_2d(&canvas).map(|ctx| CanvasSurface::new(canvas.clone(), ctx));
        let mut stage = Stage::new(options.kind.build(options.seed), surface);
        let token = CancellationToken::new();

        if let Err(e) = stage.init(width, height) {
            // No loop and no listeners: the page keeps working without a backdrop.
            log::warn!("[mount] {} inert: {e}", options.kind);
            return Ok(Self {
                kind: options.kind,
                mounted: Some(Mounted {
                    token,
                    canceller: None,
                    listeners: ListenerSet::new(),
                }),
            });
        }

        let input = InputBridge::new();
        let viewport = Viewport::new();
        let mut listeners = ListenerSet::new();
        events::wire_pointer(&mut listeners, &window, &document, &canvas, &input)?;
        events::wire_resize(&mut listeners, &window, &canvas, &viewport)?;

        let theme = DocumentTheme::new(&document)?;
        let mut scheduler = Scheduler::new(stage, input, theme, viewport, token.clone());
        let mut pacer = RafPacer::new(window);
        let canceller = pacer.canceller();
        spawn_local(async move {
            scheduler.run(&mut pacer).await;
        });

        log::info!(
            "[mount] {} on {}x{} ({} listeners)",
            options.kind,
            width,
            height,
            listeners.len()
        );
        Ok(Self {
            kind: options.kind,
            mounted: Some(Mounted {
                token,
                canceller: Some(canceller),
                listeners,
            }),
        })
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.unmount();
    }
}
