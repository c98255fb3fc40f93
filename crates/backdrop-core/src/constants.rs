// Shared tuning constants for the background effects.
//
// Distances are in CSS pixels, per-frame quantities assume one `step` per
// display frame (~60 Hz).

// Brand palette (rgb) shared by several effects
pub const BLUE: [u8; 3] = [82, 149, 255];
pub const TEAL: [u8; 3] = [101, 211, 196];
pub const VIOLET: [u8; 3] = [147, 51, 234];
pub const PALETTE: [[u8; 3]; 3] = [BLUE, TEAL, VIOLET];

// Smallest extent any boundary math is allowed to see
pub const MIN_EXTENT: f32 = 1.0;

// ---------------- GravityField ----------------
pub const GRAVITY_PARTICLE_COUNT: usize = 60;
pub const GRAVITY_ACCEL: f32 = 0.05; // added to vy every step
pub const GRAVITY_BOUNCE_DAMPING: f32 = 0.8; // velocity kept on wall contact
pub const GRAVITY_DRAG: f32 = 0.99; // uniform velocity decay per step
pub const GRAVITY_RADIUS_MIN: f32 = 2.0;
pub const GRAVITY_RADIUS_SPAN: f32 = 3.0;
pub const GRAVITY_SPEED_MAX: f32 = 1.0; // initial |v| per axis
pub const GRAVITY_CONTACT_CORRECTION: f32 = 0.2; // fraction of penetration resolved per step
pub const GRAVITY_REPEL_RADIUS: f32 = 100.0;
pub const GRAVITY_REPEL_STRENGTH: f32 = 0.5;
pub const GRAVITY_PRESSED_MULTIPLIER: f32 = 2.0;
pub const GRAVITY_EXPLOSION_RADIUS: f32 = 200.0;
pub const GRAVITY_EXPLOSION_STRENGTH: f32 = 0.5;
pub const GRAVITY_GLOW_BLUR: f32 = 10.0;
pub const GRAVITY_GLOW_ALPHA: f32 = 0.5;
pub const GRAVITY_CONTACT_LINE_ALPHA: f32 = 0.1;

// ---------------- ParticleNetwork ----------------
pub const NETWORK_PARTICLE_COUNT: usize = 80;
pub const NETWORK_SPEED_MAX: f32 = 0.25;
pub const NETWORK_RADIUS_MIN: f32 = 1.0;
pub const NETWORK_RADIUS_SPAN: f32 = 2.0;
pub const NETWORK_LINK_DISTANCE: f32 = 150.0;
pub const NETWORK_LINK_MAX_OPACITY: f32 = 0.5;
pub const NETWORK_LINK_WIDTH: f32 = 0.5;
pub const NETWORK_ATTRACT_RADIUS: f32 = 100.0;
pub const NETWORK_ATTRACT_STRENGTH: f32 = 0.2;
pub const NETWORK_DOT_ALPHA_DARK: f32 = 0.8;
pub const NETWORK_DOT_ALPHA_LIGHT: f32 = 0.6;
pub const NETWORK_LINE_ALPHA_DARK: f32 = 0.2;
pub const NETWORK_LINE_ALPHA_LIGHT: f32 = 0.15;

// Opacity range shared by both particle effects
pub const PARTICLE_OPACITY_MIN: f32 = 0.3;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;

// ---------------- AuroraWave ----------------
pub const AURORA_LAYERS: usize = 3;
pub const AURORA_TIME_RATE: f32 = 0.3; // phase units per second (0.005 per frame at 60 Hz)
pub const AURORA_SAMPLE_STEP: f32 = 5.0; // px between x samples
pub const AURORA_BASELINE: f32 = 0.3; // fraction of height for layer 0
pub const AURORA_BASELINE_STEP: f32 = 0.15;
pub const AURORA_AMPLITUDE: f32 = 80.0;
pub const AURORA_AMPLITUDE_STEP: f32 = 30.0;
pub const AURORA_FREQUENCY: f32 = 0.003;
pub const AURORA_FREQUENCY_STEP: f32 = 0.0005;
pub const AURORA_PHASE_STEP: f32 = 0.5;
// Top-stop alpha per layer
pub const AURORA_ALPHA_DARK: [f32; 3] = [0.15, 0.12, 0.10];
pub const AURORA_ALPHA_LIGHT: [f32; 3] = [0.10, 0.08, 0.06];
// Alpha at the middle of each band's gradient
pub const AURORA_MID_ALPHA_DARK: [f32; 3] = [0.08, 0.06, 0.05];
pub const AURORA_MID_ALPHA_LIGHT: [f32; 3] = [0.05, 0.04, 0.03];

// ---------------- DotGrid ----------------
pub const DOT_SPACING: f32 = 30.0;
pub const DOT_INFLUENCE_RADIUS: f32 = 200.0;
pub const DOT_BASE_SIZE: f32 = 1.5;
pub const DOT_SIZE_BOOST: f32 = 3.0;
pub const DOT_BASE_OPACITY: f32 = 0.3;
pub const DOT_OPACITY_BOOST: f32 = 0.7;
pub const DOT_SMOOTHING: f32 = 0.08; // lower = smoother/slower

// ---------------- FlowingLines ----------------
pub const LINE_CURVES: usize = 5;
pub const LINE_POINTS: usize = 8;
pub const LINE_TIME_RATE: f32 = 0.6; // 0.01 per frame at 60 Hz
pub const LINE_WAVE_AMPLITUDE: f32 = 0.5; // px per step
pub const LINE_POINT_PHASE: f32 = 0.5;
pub const LINE_SEED_TOP: f32 = 0.3;
pub const LINE_SEED_SPAN: f32 = 0.4;
pub const LINE_BAND_TOP: f32 = 0.2;
pub const LINE_BAND_BOTTOM: f32 = 0.8;
pub const LINE_DRIFT_MAX: f32 = 0.25;
pub const LINE_DRIFT_SCALE: f32 = 0.1; // how much of the drift reaches y each step
pub const LINE_HUE_BASE: f32 = 210.0;
pub const LINE_HUE_STEP: f32 = 15.0;
pub const LINE_SATURATION: f32 = 0.7;
pub const LINE_LIGHTNESS: f32 = 0.6;
pub const LINE_ALPHA: f32 = 0.15;
pub const LINE_WIDTH_MIN: f32 = 2.0;
pub const LINE_WIDTH_SPAN: f32 = 2.0;
pub const LINE_GLOW_BLUR: f32 = 20.0;
pub const LINE_GLOW_WIDTH_SCALE: f32 = 2.0;

// ---------------- MeshBlobs ----------------
// (x frac, y frac, radius px, vx, vy)
pub const BLOB_LAYOUT: [[f32; 5]; 3] = [
    [0.2, 0.3, 300.0, 0.3, 0.2],
    [0.8, 0.6, 350.0, -0.2, 0.3],
    [0.5, 0.5, 280.0, 0.25, -0.25],
];
pub const BLOB_ALPHA: [f32; 3] = [0.3, 0.25, 0.2];
// Blobs wider than a third of the canvas reflect as if they were that size
pub const BLOB_MARGIN_FRACTION: f32 = 1.0 / 3.0;
pub const BLOB_BLUR: f32 = 60.0;
