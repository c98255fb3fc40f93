// Host-side tests for the particle network.

use backdrop_core::constants::*;
use backdrop_core::effects::{NetworkParams, Particle, ParticleNetwork};
use backdrop_core::surface::DrawCmd;
use backdrop_core::{Bounds, CursorState, Effect, FrameInput, Recorder, Rgba};
use glam::Vec2;

fn still(x: f32, y: f32) -> Particle {
    Particle::new(
        Vec2::new(x, y),
        Vec2::ZERO,
        2.0,
        1.0,
        Rgba::from_rgb(BLUE, 1.0),
    )
}

fn pair(d: f32) -> ParticleNetwork {
    let mut net = ParticleNetwork::from_particles(
        vec![still(100.0, 300.0), still(100.0 + d, 300.0)],
        NetworkParams::default(),
    );
    net.init(Bounds::clamped(800.0, 600.0));
    net
}

fn line_opacities(net: &ParticleNetwork) -> Vec<f32> {
    let mut rec = Recorder::new();
    net.render(&mut rec, &FrameInput::default());
    let ops: Vec<f32> = rec
        .lines()
        .filter_map(|c| match c {
            DrawCmd::Line { opacity, .. } => Some(*opacity),
            _ => None,
        })
        .collect();
    ops
}

#[test]
fn line_drawn_only_below_link_distance() {
    for d in [0.5, 10.0, 75.0, 149.9] {
        let ops = line_opacities(&pair(d));
        assert_eq!(ops.len(), 1, "d={d}");
        let expected = (1.0 - d / NETWORK_LINK_DISTANCE) * 0.5;
        assert!((ops[0] - expected).abs() < 1e-5, "d={d} got={}", ops[0]);
    }
    for d in [150.0, 150.1, 400.0] {
        assert!(line_opacities(&pair(d)).is_empty(), "d={d}");
    }
}

#[test]
fn links_are_rebuilt_from_positions() {
    let mut net = pair(100.0);
    assert_eq!(net.links().len(), 1);
    // Pointer far away: nothing moves, so the link set stays the same.
    net.step(&FrameInput::default());
    assert_eq!(net.links().len(), 1);
    assert!(pair(200.0).links().is_empty());
}

#[test]
fn cursor_attracts_nearby_particles() {
    let mut net =
        ParticleNetwork::from_particles(vec![still(100.0, 100.0)], NetworkParams::default());
    net.init(Bounds::clamped(800.0, 600.0));
    let input = FrameInput {
        cursor: CursorState {
            position: Some(Vec2::new(150.0, 100.0)),
            ..CursorState::default()
        },
        ..FrameInput::default()
    };
    net.step(&input);
    // (100 - 50) / 100 * 0.2 toward the cursor.
    let vx = net.particles()[0].vel.x;
    assert!((vx - 0.1).abs() < 1e-6, "vx={vx}");
    net.step(&input);
    assert!(net.particles()[0].pos.x > 100.0);
}

#[test]
fn cursor_beyond_radius_has_no_effect() {
    let mut net =
        ParticleNetwork::from_particles(vec![still(100.0, 100.0)], NetworkParams::default());
    net.init(Bounds::clamped(800.0, 600.0));
    net.step(&FrameInput {
        cursor: CursorState {
            position: Some(Vec2::new(300.0, 100.0)),
            ..CursorState::default()
        },
        ..FrameInput::default()
    });
    assert_eq!(net.particles()[0].vel, Vec2::ZERO);
}

#[test]
fn drifting_particles_stay_inside() {
    let (w, h) = (300.0, 200.0);
    let mut net = ParticleNetwork::new(11);
    net.init(Bounds::clamped(w, h));
    assert_eq!(net.particles().len(), NETWORK_PARTICLE_COUNT);
    for k in 0..2000u64 {
        net.step(&FrameInput {
            frame: k,
            ..FrameInput::default()
        });
        for p in net.particles() {
            assert!(Bounds::clamped(w, h).contains(p.pos), "{:?}", p.pos);
        }
    }
}

#[test]
fn theme_changes_dot_alpha() {
    let net = pair(400.0);
    let alpha = |dark: bool| {
        let mut rec = Recorder::new();
        net.render(
            &mut rec,
            &FrameInput {
                dark,
                ..FrameInput::default()
            },
        );
        let first = rec.circles().find_map(|c| match c {
            DrawCmd::Circle { color, .. } => Some(color.a),
            _ => None,
        });
        first
    };
    assert_eq!(alpha(true), Some(NETWORK_DOT_ALPHA_DARK));
    assert_eq!(alpha(false), Some(NETWORK_DOT_ALPHA_LIGHT));
}

#[test]
fn custom_params_set_count_and_link_range() {
    let params = NetworkParams {
        count: 7,
        link_distance: 50.0,
        ..NetworkParams::default()
    };
    let mut net = ParticleNetwork::with_params(params, 21);
    net.init(Bounds::clamped(400.0, 300.0));
    assert_eq!(net.particles().len(), 7);
    assert_eq!(net.params().link_distance, 50.0);
    assert_eq!(net.link_opacity(60.0), None);
    let half = net.link_opacity(25.0).unwrap_or(0.0);
    assert!((half - 0.5 * NETWORK_LINK_MAX_OPACITY).abs() < 1e-6);
}
