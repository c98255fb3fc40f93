// DOM hooks and sizing limits for the web host.
//
// Effect tuning lives in `backdrop_core::constants`; only values that depend
// on the page markup or the browser belong here.

// Canvas attributes read at auto-mount
pub const EFFECT_ATTR: &str = "data-backdrop";
pub const SEED_ATTR: &str = "data-backdrop-seed";
pub const AUTO_MOUNT_SELECTOR: &str = "canvas[data-backdrop]";

// Class on <html> that marks dark mode
pub const DARK_CLASS: &str = "dark";

// Backing store scale cap
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Window events feeding the cursor state
pub const POINTER_EVENTS: [&str; 5] = [
    "pointermove",
    "pointerdown",
    "pointerup",
    "pointercancel",
    "click",
];

// Fired on <html> when the pointer leaves the page
pub const LEAVE_EVENT: &str = "mouseleave";

pub const RESIZE_EVENT: &str = "resize";
