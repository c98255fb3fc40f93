// Host-side tests for the drifting gradient blobs.

use backdrop_core::constants::*;
use backdrop_core::effects::{Blob, MeshBlobs};
use backdrop_core::surface::{Blend, DrawCmd};
use backdrop_core::{Bounds, Effect, FrameInput, Recorder, Rgba};
use glam::Vec2;

fn blob(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Blob {
    Blob {
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        radius,
        color: Rgba::from_rgb(TEAL, 0.25),
    }
}

#[test]
fn velocity_flips_once_per_contact() {
    let bounds = Bounds::clamped(200.0, 100.0);
    let mut b = blob(21.0, 50.0, -1.0, 0.0, 20.0);
    let mut flips = 0;
    for _ in 0..30 {
        flips += b.advance(bounds);
    }
    assert_eq!(flips, 1);
    assert!(b.vel.x > 0.0);
}

#[test]
fn blob_bounces_between_both_walls() {
    let bounds = Bounds::clamped(200.0, 100.0);
    let mut b = blob(100.0, 50.0, 3.0, 0.0, 20.0);
    let mut flips = 0;
    // 160px of travel between the margins; ~2 crossings at 3px per frame.
    for _ in 0..120 {
        flips += b.advance(bounds);
    }
    assert_eq!(flips, 2);
}

#[test]
fn centers_stay_near_bounds() {
    for (w, h) in [(800.0, 600.0), (320.0, 480.0), (50.0, 40.0)] {
        let bounds = Bounds::clamped(w, h);
        let mut mesh = MeshBlobs::new();
        mesh.init(bounds);
        assert_eq!(mesh.blobs().len(), BLOB_LAYOUT.len());
        for _ in 0..5000 {
            mesh.step(&FrameInput::default());
            for b in mesh.blobs() {
                let r = b.radius;
                assert!(b.pos.x >= -r && b.pos.x <= w + r, "x={} in {w}", b.pos.x);
                assert!(b.pos.y >= -r && b.pos.y <= h + r, "y={} in {h}", b.pos.y);
            }
        }
    }
}

#[test]
fn init_keeps_existing_blobs() {
    let mut mesh = MeshBlobs::from_blobs(vec![blob(10.0, 10.0, 1.0, 1.0, 50.0)]);
    mesh.init(Bounds::clamped(400.0, 400.0));
    assert_eq!(mesh.blobs().len(), 1);
    assert_eq!(mesh.blobs()[0].pos, Vec2::new(10.0, 10.0));
}

#[test]
fn render_blends_additively() {
    let mut mesh = MeshBlobs::new();
    mesh.init(Bounds::clamped(400.0, 300.0));
    let mut rec = Recorder::new();
    mesh.render(&mut rec, &FrameInput::default());
    assert_eq!(rec.commands.len(), 5);
    assert_eq!(rec.commands[0], DrawCmd::Blur(BLOB_BLUR));
    assert_eq!(rec.commands[4], DrawCmd::Blur(0.0));
    for cmd in &rec.commands[1..4] {
        assert!(matches!(
            cmd,
            DrawCmd::FillRect {
                blend: Blend::Additive,
                ..
            }
        ));
    }
}
