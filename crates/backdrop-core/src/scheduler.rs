//! Run-until-cancelled frame loop.
//!
//! The loop never owns a timer: a host [`FramePacer`] decides when the next
//! frame happens (`requestAnimationFrame` on the web, a counter in tests).

use crate::effect::{FrameInput, Stage};
use crate::geom::Bounds;
use crate::input::InputBridge;
use crate::surface::Surface;
use crate::theme::ThemeSource;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Shared stop flag, checked at the top of every loop iteration.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Latest viewport size reported by the host; read once per frame.
#[derive(Clone, Debug, Default)]
pub struct Viewport(Rc<Cell<Option<Bounds>>>);

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites any size not yet picked up by a frame.
    pub fn request(&self, width: f32, height: f32) {
        self.0.set(Some(Bounds::clamped(width, height)));
    }

    pub fn take(&self) -> Option<Bounds> {
        self.0.take()
    }
}

pub trait FramePacer {
    /// Resolves with the timestamp (ms) of the next frame, or `None` once the
    /// host stops delivering frames.
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>>;
}

/// Turns host timestamps into elapsed seconds and a frame counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    origin_ms: Option<f64>,
    frame: u64,
}

impl FrameClock {
    /// Non-finite timestamps count a frame but never become the origin.
    pub fn tick(&mut self, now_ms: f64) -> (f32, u64) {
        let elapsed = if now_ms.is_finite() {
            let origin = *self.origin_ms.get_or_insert(now_ms);
            ((now_ms - origin) / 1000.0).max(0.0) as f32
        } else {
            0.0
        };
        let frame = self.frame;
        self.frame += 1;
        (elapsed, frame)
    }
}

pub struct Scheduler<S, T> {
    stage: Stage<S>,
    input: InputBridge,
    theme: T,
    viewport: Viewport,
    token: CancellationToken,
    clock: FrameClock,
}

impl<S: Surface, T: ThemeSource> Scheduler<S, T> {
    pub fn new(
        stage: Stage<S>,
        input: InputBridge,
        theme: T,
        viewport: Viewport,
        token: CancellationToken,
    ) -> Self {
        Self {
            stage,
            input,
            theme,
            viewport,
            token,
            clock: FrameClock::default(),
        }
    }

    /// One `step` + `render` pair. Returns `false` once cancelled.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        if let Some(bounds) = self.viewport.take() {
            self.stage.resize(bounds);
        }
        let (elapsed, frame) = self.clock.tick(now_ms);
        let input = FrameInput {
            elapsed,
            frame,
            cursor: self.input.snapshot(),
            dark: self.theme.is_dark(),
        };
        self.stage.step(&input);
        self.stage.render(&input);
        true
    }

    /// Drive frames until the token is cancelled or the pacer runs dry, then
    /// dispose the stage.
    pub async fn run<P: FramePacer>(&mut self, pacer: &mut P) {
        loop {
            if self.token.is_cancelled() {
                break;
            }
            let Some(now_ms) = pacer.next_frame().await else {
                break;
            };
            if !self.frame(now_ms) {
                break;
            }
        }
        self.stage.dispose();
        log::info!("[scheduler] {} stopped", self.stage.kind());
    }

    pub fn stage(&self) -> &Stage<S> {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage<S> {
        &mut self.stage
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}
