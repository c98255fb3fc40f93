// Host-side tests for the aurora bands.

use backdrop_core::constants::*;
use backdrop_core::effects::{AuroraLayer, AuroraWave};
use backdrop_core::surface::{DrawCmd, Fill, PathSeg};
use backdrop_core::{Bounds, Effect, FrameInput, Recorder};
use glam::Vec2;

#[test]
fn layer_parameters_follow_index() {
    let bounds = Bounds::clamped(800.0, 600.0);
    let l0 = AuroraLayer::at(0, 0.0, bounds);
    let l2 = AuroraLayer::at(2, 1.0, bounds);
    assert!((l0.baseline - 180.0).abs() < 1e-3);
    assert_eq!(l0.amplitude, 80.0);
    assert_eq!(l0.sample(0.0), l0.baseline);
    assert!((l2.baseline - 360.0).abs() < 1e-3);
    assert_eq!(l2.amplitude, 140.0);
    assert!((l2.frequency - 0.002).abs() < 1e-7);
    assert_eq!(l2.phase, 2.0);
}

#[test]
fn sample_matches_closed_form() {
    let layer = AuroraLayer::at(1, 2.5, Bounds::clamped(1000.0, 800.0));
    for x in [0.0_f32, 37.0, 250.0, 999.0] {
        let f = layer.frequency;
        let expected = layer.baseline
            + (x * f + layer.phase).sin() * layer.amplitude
            + (x * f * 2.0 + layer.phase * 1.5).sin() * layer.amplitude / 2.0;
        assert!((layer.sample(x) - expected).abs() < 1e-3);
    }
}

#[test]
fn outline_closes_along_the_bottom() {
    let bounds = Bounds::clamped(800.0, 600.0);
    let layer = AuroraLayer::at(0, 0.3, bounds);
    let path = layer.outline(bounds);
    let segs = path.segments();
    // Move + one line per 5px sample + two corners + close.
    assert_eq!(segs.len(), 1 + 160 + 2 + 1);
    assert_eq!(segs[0], PathSeg::MoveTo(Vec2::new(0.0, layer.sample(0.0))));
    assert_eq!(segs[segs.len() - 3], PathSeg::LineTo(Vec2::new(800.0, 600.0)));
    assert_eq!(segs[segs.len() - 2], PathSeg::LineTo(Vec2::new(0.0, 600.0)));
    assert_eq!(segs[segs.len() - 1], PathSeg::Close);
}

#[test]
fn fill_fades_to_transparent_and_tracks_theme() {
    let layer = AuroraLayer::at(0, 0.0, Bounds::clamped(800.0, 600.0));
    let cases = [
        (true, AURORA_ALPHA_DARK, AURORA_MID_ALPHA_DARK),
        (false, AURORA_ALPHA_LIGHT, AURORA_MID_ALPHA_LIGHT),
    ];
    for (dark, alphas, mids) in cases {
        let Fill::Linear { from, to, stops } = layer.fill(dark) else {
            panic!("aurora uses a linear gradient");
        };
        assert!((from.y - 100.0).abs() < 1e-3);
        assert!((to.y - 260.0).abs() < 1e-3);
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].color.a, alphas[0]);
        assert_eq!(stops[1].color.a, mids[0]);
        assert_eq!(stops[2].color.a, 0.0);
        assert_eq!([stops[0].color.r, stops[0].color.g, stops[0].color.b], BLUE);
    }
}

#[test]
fn middle_stops_follow_each_layer() {
    let bounds = Bounds::clamped(800.0, 600.0);
    let mids: Vec<f32> = (0..AURORA_LAYERS)
        .map(|i| match AuroraLayer::at(i, 0.0, bounds).fill(true) {
            Fill::Linear { stops, .. } => stops[1].color.a,
            _ => f32::NAN,
        })
        .collect();
    assert_eq!(mids, vec![0.08, 0.06, 0.05]);
}

#[test]
fn time_is_derived_from_elapsed() {
    let mut wave = AuroraWave::new();
    wave.init(Bounds::clamped(400.0, 300.0));
    wave.step(&FrameInput {
        elapsed: 10.0,
        ..FrameInput::default()
    });
    assert!((wave.time() - 10.0 * AURORA_TIME_RATE).abs() < 1e-6);
    // Same elapsed, same picture: no accumulated state.
    wave.step(&FrameInput {
        elapsed: 10.0,
        ..FrameInput::default()
    });
    assert!((wave.time() - 10.0 * AURORA_TIME_RATE).abs() < 1e-6);
}

#[test]
fn render_fills_each_layer() {
    let mut wave = AuroraWave::new();
    wave.init(Bounds::clamped(400.0, 300.0));
    let mut rec = Recorder::new();
    wave.render(&mut rec, &FrameInput::default());
    assert_eq!(rec.commands.len(), AURORA_LAYERS);
    assert!(rec
        .commands
        .iter()
        .all(|c| matches!(c, DrawCmd::FillPath { .. })));
}
