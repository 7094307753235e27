use glam::Vec3;

// Shared timing and tuning constants used by both web and native hosts.

// Clock
pub const MAX_DELTA_SECS: f32 = 0.1; // per-frame delta clamp after a stall
pub const NOMINAL_DELTA_SECS: f32 = 1.0 / 60.0; // used when the host has no timestamp

// Gesture
pub const REQUIRED_BLOW_SECS: f64 = 2.3; // hold needed to blow the candle out
pub const HOLD_TOLERANCE_SECS: f64 = 1e-9; // absorbs rounding in `now - started_at`
pub const HARD_TRY_MESSAGE_SECS: f64 = 1.0; // lifetime of the "blow harder" hint
pub const GESTURE_POLL_INTERVAL_MS: i32 = 50; // progress refresh while holding (20 Hz)

// Intro
pub const CONTINUE_BUTTON_DELAY_SECS: f64 = 3.0; // after the card is dismissed
pub const BALLOON_COUNT: usize = 20;
pub const BALLOON_SEED: u64 = 0x5EED_B1A7_0000_0014;
pub const BALLOON_DELAY_MAX_SECS: f32 = 5.0;
pub const BALLOON_DURATION_MIN_SECS: f32 = 5.0;
pub const BALLOON_DURATION_SPAN_SECS: f32 = 5.0;

// Rose-gold palette shared by balloons and UI accents
pub const BALLOON_COLORS: [[f32; 3]; 5] = [
    [0.718, 0.431, 0.475], // rose gold
    [0.878, 0.749, 0.722], // blush
    [0.620, 0.357, 0.396], // deep rose
    [0.831, 0.647, 0.647], // dusty pink
    [0.949, 0.843, 0.835], // pale pink
];

// Scene elements known to the renderer; reveal stages may only target these.
pub const ELEMENT_CLOTH: &str = "cloth";
pub const ELEMENT_CAKE: &str = "cake";
pub const ELEMENT_FRAMES: [&str; 4] = ["frame-1", "frame-2", "frame-3", "frame-4"];
pub const ELEMENT_BOUQUET: &str = "bouquet";
pub const SCENE_ELEMENTS: [&str; 7] = [
    ELEMENT_CLOTH,
    ELEMENT_CAKE,
    ELEMENT_FRAMES[0],
    ELEMENT_FRAMES[1],
    ELEMENT_FRAMES[2],
    ELEMENT_FRAMES[3],
    ELEMENT_BOUQUET,
];

// Reveal timing (scene seconds) and ease-out rates (per second)
pub const CLOTH_START_SECS: f64 = 0.5;
pub const CLOTH_RATE: f32 = 3.0;
pub const CAKE_START_SECS: f64 = 2.0;
pub const CAKE_RATE: f32 = 2.0; // heavier than the cloth
pub const CAKE_DROP_HEIGHT: f32 = 5.0;
pub const CAKE_REST_HEIGHT: f32 = 0.05;
pub const CAKE_SCALE: f32 = 0.4;
pub const FRAME_START_SECS: [f64; 4] = [3.5, 3.7, 3.9, 4.1];
pub const FRAME_RATE: f32 = 5.0;
pub const FRAME_GROUP_SCALE: f32 = 0.5;
pub const BOUQUET_START_SECS: f64 = 4.5;
pub const BOUQUET_RATE: f32 = 3.0;
pub const BOUQUET_SCALE: f32 = 0.6;

// Flame waveform: idle flicker
pub const IDLE_FLICKER_FREQ: f64 = 10.0;
pub const IDLE_FLICKER_AMP: f32 = 0.1;

// Flame waveform: struggling flicker while blowing
pub const STRUGGLE_FREQ_A: f64 = 30.0;
pub const STRUGGLE_AMP_A: f32 = 0.4;
pub const STRUGGLE_FREQ_B: f64 = 50.0;
pub const STRUGGLE_AMP_B: f32 = 0.2;
pub const STRUGGLE_BASE_SCALE: f32 = 0.4;
pub const STRUGGLE_SCALE_GAIN: f32 = 0.3;
pub const JITTER_X_FREQ: f64 = 25.0;
pub const JITTER_X_AMP: f32 = 0.08;
pub const JITTER_Z_FREQ: f64 = 20.0;
pub const JITTER_Z_AMP: f32 = 0.06;
pub const SWAY_FREQ: f64 = 15.0;
pub const SWAY_AMP: f32 = 0.5;

// Flame vertical bob and derived geometry
pub const BOB_FREQ: f64 = 20.0;
pub const BOB_AMP: f32 = 0.02;
pub const FLAME_CORE_SCALE: f32 = 0.5; // inner core relative to outer flame
pub const FLAME_VISIBLE_EPSILON: f32 = 0.01;

// Flame decay once extinguished (per tick)
pub const EXTINGUISH_DECREMENT: f32 = 0.05;

// Accent (pin) candles relative to the main flame
pub const ACCENT_SCALE: f32 = 0.8;
pub const ACCENT_OFFSET: f32 = 0.5;
pub const ACCENT_ROTATION: f32 = 0.7;

// Smoke puff shown after the flame is gone
pub const SMOKE_PUFF_COUNT: usize = 3;
pub const SMOKE_BASE_RADIUS: f32 = 0.05;
pub const SMOKE_RADIUS_STEP: f32 = 0.01;
pub const SMOKE_BASE_OPACITY: f32 = 0.4;
pub const SMOKE_OPACITY_STEP: f32 = 0.1;
pub const SMOKE_RISE_STEP: f32 = 0.15;

// Camera
pub const CAMERA_INITIAL_POSITION: Vec3 = Vec3::new(0.0, 1.0, 3.5);
pub const CAMERA_INITIAL_LOOK_AT: Vec3 = Vec3::ZERO;
pub const CAMERA_CLOSE_UP_POSITION: Vec3 = Vec3::new(0.0, 0.6, 1.8);
pub const CAMERA_CLOSE_UP_LOOK_AT: Vec3 = Vec3::new(0.0, 0.5, 0.0);
pub const CAMERA_CLOSE_UP_ORBIT_TARGET: Vec3 = Vec3::new(0.0, 0.8, 0.0);
pub const CAMERA_CLOSE_UP_RATE: f32 = 3.0; // exponential smoothing per second
pub const CAMERA_WIDE_DISTANCE: (f32, f32) = (5.0, 15.0);
pub const CAMERA_CLOSE_DISTANCE: (f32, f32) = (2.0, 4.0);
pub const CAMERA_SETTLE_EPSILON: f32 = 1e-3;
