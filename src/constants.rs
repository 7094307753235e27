// DOM hooks and media used by the web front-end.
// The page markup owns the layout; these ids are the only contract between
// it and the wasm module.

// Overlay panels
pub const CARD_ID: &str = "greeting-card";
pub const CONTINUE_BUTTON_ID: &str = "continue-button";
pub const BLOW_BUTTON_ID: &str = "blow-button";
pub const BLOW_LABEL_ID: &str = "blow-label";
pub const BLOW_PROGRESS_ID: &str = "blow-progress";
pub const VIGNETTE_ID: &str = "blow-vignette";
pub const HARD_TRY_ID: &str = "hard-try-message";
pub const CELEBRATION_ID: &str = "celebration";

pub const HIDDEN_CLASS: &str = "hidden";
pub const PRESSED_CLASS: &str = "pressed";

// Background music
pub const INTRO_MUSIC_URL: &str = "/audio/he-hey-hey.mp3";
pub const INTRO_MUSIC_VOLUME: f64 = 0.5;
pub const SCENE_MUSIC_URL: &str = "/audio/hapy-cats.mp3";
pub const SCENE_MUSIC_VOLUME: f64 = 0.4;
