// Shared interaction/effect tuning constants for the page.

// Hover speech
pub const HOVER_SPEAK_THROTTLE_MS: f64 = 700.0; // min gap between announcements per panel
pub const HOVER_SPEECH_RATE: f32 = 1.05;
pub const HOVER_SPEECH_PITCH: f32 = 1.0;
pub const HOVER_SPEECH_VOLUME: f32 = 1.0;

// Dual-click easter egg
pub const DUAL_CLICK_WINDOW_MS: f64 = 2000.0; // both sides clicked within this window
pub const DUAL_CLICK_NOTICE_TEXT: &str = "Nice.";
pub const DUAL_CLICK_SPOKEN_TEXT: &str = "Nice";

// Pointer offsets are stored with this many decimals
pub const OFFSET_DECIMALS: i32 = 3;

// Confetti burst
pub const CONFETTI_MIN_PIECES: usize = 24;
pub const CONFETTI_MAX_PIECES: usize = 35; // inclusive
pub const CONFETTI_DX_RANGE: (f32, f32) = (-1.0, 1.0);
pub const CONFETTI_DY_RANGE: (f32, f32) = (-1.5, -0.5); // upward bias
pub const CONFETTI_ROT_RANGE_DEG: (f32, f32) = (-360.0, 360.0);
pub const CONFETTI_LIFE_RANGE_SEC: (f32, f32) = (0.7, 1.4);
pub const CONFETTI_REMOVE_AFTER_MS: i32 = 1600; // fixed, independent of `life`

// Transient notice timeline (relative to creation)
pub const NOTICE_SHOW_AFTER_MS: i32 = 10;
pub const NOTICE_HIDE_AFTER_MS: i32 = 1600;
pub const NOTICE_REMOVE_AFTER_MS: i32 = 2000;

// DOM contract
pub const LEFT_PANEL_ID: &str = "side-left";
pub const RIGHT_PANEL_ID: &str = "side-right";
pub const FX_LAYER_SELECTOR: &str = ".fx-layer";
pub const LABEL_ATTRIBUTE: &str = "data-label";
pub const CONFETTI_CLASS: &str = "confetti";
pub const NOTICE_CLASS: &str = "toast";
pub const NOTICE_SHOWN_CLASS: &str = "show";
