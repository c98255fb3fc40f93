// Host-side tests for the frame loop, driven with pollster instead of rAF.

use backdrop_core::surface::{Blend, DrawCmd, Fill, Glow, Path, Stroke};
use backdrop_core::{
    Bounds, CancellationToken, EffectKind, FixedTheme, FrameClock, FramePacer, InputBridge,
    Recorder, Rgba, Scheduler, SharedTheme, Stage, StageState, Surface, Viewport,
};
use glam::Vec2;
use std::cell::Cell;
use std::future::{ready, Future};
use std::rc::Rc;

/// Counts frames that reached the surface.
#[derive(Clone, Default)]
struct CountingSurface {
    clears: Rc<Cell<u32>>,
}

impl Surface for CountingSurface {
    fn clear(&mut self, _bounds: Bounds) {
        self.clears.set(self.clears.get() + 1);
    }
    fn fill_circle(&mut self, _: Vec2, _: f32, _: Rgba, _: Option<Glow>) {}
    fn stroke_line(&mut self, _: Vec2, _: Vec2, _: Rgba, _: f32, _: f32) {}
    fn fill_path(&mut self, _: &Path, _: &Fill) {}
    fn stroke_path(&mut self, _: &Path, _: &Stroke) {}
    fn fill_rect(&mut self, _: Bounds, _: &Fill, _: Blend) {}
    fn set_blur(&mut self, _: f32) {}
}

/// Delivers `remaining` frames 16ms apart, then reports the host gone.
struct FixedPacer {
    remaining: u32,
    now: f64,
}

impl FramePacer for FixedPacer {
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>> {
        let next = (self.remaining > 0).then(|| {
            self.remaining -= 1;
            self.now += 16.0;
            self.now
        });
        ready(next)
    }
}

/// Cancels the token while handing out frame `cancel_at`.
struct CancellingPacer {
    token: CancellationToken,
    cancel_at: u32,
    calls: u32,
}

impl FramePacer for CancellingPacer {
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>> {
        self.calls += 1;
        if self.calls == self.cancel_at {
            self.token.cancel();
        }
        ready(Some(self.calls as f64 * 16.0))
    }
}

fn counting_scheduler(
    kind: EffectKind,
) -> (Scheduler<CountingSurface, FixedTheme>, Rc<Cell<u32>>) {
    let surface = CountingSurface::default();
    let clears = surface.clears.clone();
    let mut stage = Stage::new(kind.build(Some(9)), Some(surface));
    stage.init(320.0, 240.0).expect("init");
    let scheduler = Scheduler::new(
        stage,
        InputBridge::new(),
        FixedTheme(false),
        Viewport::new(),
        CancellationToken::new(),
    );
    (scheduler, clears)
}

#[test]
fn runs_until_pacer_stops_then_disposes() {
    let (mut scheduler, clears) = counting_scheduler(EffectKind::GravityField);
    let mut pacer = FixedPacer {
        remaining: 5,
        now: 1000.0,
    };
    pollster::block_on(scheduler.run(&mut pacer));
    assert_eq!(clears.get(), 5);
    assert_eq!(scheduler.stage().state(), StageState::Disposed);
}

#[test]
fn cancellation_stops_before_the_next_step() {
    let (mut scheduler, clears) = counting_scheduler(EffectKind::ParticleNetwork);
    let mut pacer = CancellingPacer {
        token: scheduler.token().clone(),
        cancel_at: 3,
        calls: 0,
    };
    pollster::block_on(scheduler.run(&mut pacer));
    assert_eq!(pacer.calls, 3);
    assert_eq!(clears.get(), 2);
    assert_eq!(scheduler.stage().state(), StageState::Disposed);
}

#[test]
fn cancelled_before_start_draws_nothing() {
    let (mut scheduler, clears) = counting_scheduler(EffectKind::MeshBlobs);
    scheduler.token().cancel();
    let mut pacer = FixedPacer {
        remaining: 10,
        now: 0.0,
    };
    pollster::block_on(scheduler.run(&mut pacer));
    assert_eq!(pacer.remaining, 10);
    assert_eq!(clears.get(), 0);
    assert!(!scheduler.frame(0.0));
}

#[test]
fn inert_stage_never_draws() {
    let mut stage: Stage<Recorder> = Stage::new(EffectKind::AuroraWave.build(None), None);
    assert!(stage.init(320.0, 240.0).is_err());
    let mut scheduler = Scheduler::new(
        stage,
        InputBridge::new(),
        FixedTheme(true),
        Viewport::new(),
        CancellationToken::new(),
    );
    assert!(scheduler.frame(16.0));
    assert_eq!(scheduler.stage().state(), StageState::Inert);
    assert!(scheduler.stage().surface().is_none());
}

#[test]
fn latest_viewport_request_wins() {
    let viewport = Viewport::new();
    let mut stage = Stage::new(EffectKind::DotGrid.build(None), Some(Recorder::new()));
    stage.init(320.0, 240.0).expect("init");
    let mut scheduler = Scheduler::new(
        stage,
        InputBridge::new(),
        FixedTheme(false),
        viewport.clone(),
        CancellationToken::new(),
    );
    viewport.request(500.0, 400.0);
    viewport.request(640.0, 480.0);
    scheduler.frame(0.0);
    assert_eq!(scheduler.stage().bounds(), Bounds::clamped(640.0, 480.0));

    viewport.request(0.0, 0.0);
    scheduler.frame(16.0);
    assert_eq!(scheduler.stage().bounds(), Bounds::clamped(1.0, 1.0));
    assert!(viewport.take().is_none());
}

#[test]
fn click_reaches_exactly_one_frame() {
    let input = InputBridge::new();
    let mut stage = Stage::new(
        EffectKind::GravityField.build(Some(2)),
        Some(Recorder::new()),
    );
    stage.init(320.0, 240.0).expect("init");
    let mut scheduler = Scheduler::new(
        stage,
        input.clone(),
        FixedTheme(false),
        Viewport::new(),
        CancellationToken::new(),
    );
    input.click(100.0, 50.0);
    assert_eq!(input.peek().click, Some(Vec2::new(100.0, 50.0)));
    scheduler.frame(0.0);
    assert_eq!(input.peek().click, None);
    assert_eq!(input.peek().position, Some(Vec2::new(100.0, 50.0)));
}

#[test]
fn input_bridge_tracks_pointer() {
    let input = InputBridge::new();
    assert_eq!(input.peek().position, None);
    input.pointer_move(10.0, 20.0);
    input.pointer_move(f32::NAN, 5.0);
    input.pointer_down();
    let snap = input.snapshot();
    assert_eq!(snap.position, Some(Vec2::new(10.0, 20.0)));
    assert!(snap.pressed);
    input.pointer_up();
    input.pointer_leave();
    let snap = input.snapshot();
    assert!(!snap.pressed);
    assert_eq!(snap.position, None);
}

/// Alpha of the first dot drawn in the most recent frame. The recorder keeps
/// every frame, so look after the last `Clear`.
fn last_frame_dot_alpha(scheduler: &Scheduler<Recorder, SharedTheme>) -> Option<f32> {
    let rec = scheduler.stage().surface()?;
    let start = rec
        .commands
        .iter()
        .rposition(|c| matches!(c, DrawCmd::Clear(_)))?;
    rec.commands[start..].iter().find_map(|c| match c {
        DrawCmd::Circle { color, .. } => Some(color.a),
        _ => None,
    })
}

#[test]
fn theme_is_sampled_per_frame() {
    let theme = SharedTheme::new(false);
    let handle = theme.clone();
    let mut stage = Stage::new(
        EffectKind::ParticleNetwork.build(Some(4)),
        Some(Recorder::new()),
    );
    stage.init(200.0, 200.0).expect("init");
    let mut scheduler = Scheduler::new(
        stage,
        InputBridge::new(),
        theme,
        Viewport::new(),
        CancellationToken::new(),
    );
    scheduler.frame(0.0);
    let light = last_frame_dot_alpha(&scheduler).expect("dots drawn");
    handle.set_dark(true);
    scheduler.frame(16.0);
    let dark = last_frame_dot_alpha(&scheduler).expect("dots drawn");
    assert!(dark > light, "dark={dark} light={light}");
}

#[test]
fn frame_clock_counts_from_first_tick() {
    let mut clock = FrameClock::default();
    assert_eq!(clock.tick(5000.0), (0.0, 0));
    assert_eq!(clock.tick(5500.0), (0.5, 1));
    assert_eq!(clock.tick(f64::NAN), (0.0, 2));
}

#[test]
fn frame_clock_skips_non_finite_origin() {
    let mut clock = FrameClock::default();
    assert_eq!(clock.tick(f64::NAN), (0.0, 0));
    assert_eq!(clock.tick(f64::INFINITY), (0.0, 1));
    assert_eq!(clock.tick(5000.0), (0.0, 2));
    assert_eq!(clock.tick(6000.0), (1.0, 3));
}
