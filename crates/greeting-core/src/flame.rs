use crate::constants::*;
use crate::interaction::InteractionState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlameConfig {
    pub extinguish_decrement: f32,
    pub accent_scale: f32,
    pub accent_offset: f32,
    pub accent_rotation: f32,
}

impl Default for FlameConfig {
    fn default() -> Self {
        Self {
            extinguish_decrement: EXTINGUISH_DECREMENT,
            accent_scale: ACCENT_SCALE,
            accent_offset: ACCENT_OFFSET,
            accent_rotation: ACCENT_ROTATION,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FlameParams {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub offset_z: f32,
    pub rotation_z: f32,
    pub opacity: f32,
    pub visible: bool,
}

impl FlameParams {
    const HIDDEN: Self = Self {
        scale: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
        offset_z: 0.0,
        rotation_z: 0.0,
        opacity: 0.0,
        visible: false,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SmokePuff {
    pub offset_y: f32,
    pub radius: f32,
    pub opacity: f32,
}

/// Flame parameters for the main candle and both accent candles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FlameFrame {
    pub main: FlameParams,
    pub core_scale: f32,
    pub left: FlameParams,
    pub right: FlameParams,
    pub smoke: Option<[SmokePuff; SMOKE_PUFF_COUNT]>,
}

/// Deterministic waveform for a lit flame at scene time `t`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Waveform {
    scale: f32,
    offset_x: f32,
    offset_z: f32,
    rotation_z: f32,
}

fn waveform(state: InteractionState, t: f64) -> Waveform {
    let wave = |freq: f64| (t * freq).sin() as f32;
    match state {
        InteractionState::Blowing => {
            let struggle = wave(STRUGGLE_FREQ_A) * STRUGGLE_AMP_A + wave(STRUGGLE_FREQ_B) * STRUGGLE_AMP_B;
            Waveform {
                scale: STRUGGLE_BASE_SCALE + struggle * STRUGGLE_SCALE_GAIN,
                offset_x: wave(JITTER_X_FREQ) * JITTER_X_AMP,
                offset_z: (t * JITTER_Z_FREQ).cos() as f32 * JITTER_Z_AMP,
                rotation_z: wave(SWAY_FREQ) * SWAY_AMP,
            }
        }
        _ => Waveform {
            scale: 1.0 + wave(IDLE_FLICKER_FREQ) * IDLE_FLICKER_AMP,
            ..Waveform::default()
        },
    }
}

fn smoke_puffs() -> [SmokePuff; SMOKE_PUFF_COUNT] {
    std::array::from_fn(|i| {
        let i = i as f32;
        SmokePuff {
            offset_y: SMOKE_RISE_STEP * i,
            radius: SMOKE_BASE_RADIUS - SMOKE_RADIUS_STEP * i,
            opacity: SMOKE_BASE_OPACITY - SMOKE_OPACITY_STEP * i,
        }
    })
}

/// Derives flame visuals from scene time and interaction state.
///
/// Only `last_scale` survives between ticks; it carries the flame size into
/// the extinguish decay.
#[derive(Clone, Debug)]
pub struct FlameAnimator {
    config: FlameConfig,
    last_scale: f32,
}

impl FlameAnimator {
    pub fn new(config: FlameConfig) -> Self {
        Self {
            config,
            last_scale: 1.0,
        }
    }

    pub fn last_scale(&self) -> f32 {
        self.last_scale
    }

    pub fn step(&mut self, state: InteractionState, t: f64) -> FlameFrame {
        if state == InteractionState::Extinguished {
            return self.step_extinguished();
        }

        let w = waveform(state, t);
        self.last_scale = w.scale;
        let main = FlameParams {
            scale: w.scale,
            offset_x: w.offset_x,
            offset_y: (t * BOB_FREQ).sin() as f32 * BOB_AMP,
            offset_z: w.offset_z,
            rotation_z: w.rotation_z,
            opacity: 1.0,
            visible: true,
        };
        let accent = |mirror: f32| FlameParams {
            scale: w.scale * self.config.accent_scale,
            offset_x: mirror * w.offset_x * self.config.accent_offset,
            offset_y: 0.0,
            offset_z: w.offset_z * self.config.accent_offset,
            rotation_z: mirror * w.rotation_z * self.config.accent_rotation,
            opacity: 1.0,
            visible: true,
        };
        FlameFrame {
            main,
            core_scale: w.scale * FLAME_CORE_SCALE,
            left: accent(1.0),
            right: accent(-1.0),
            smoke: None,
        }
    }

    fn step_extinguished(&mut self) -> FlameFrame {
        self.last_scale = (self.last_scale - self.config.extinguish_decrement).max(0.0);
        let scale = self.last_scale;
        let main = FlameParams {
            scale,
            opacity: scale.min(1.0),
            visible: scale > FLAME_VISIBLE_EPSILON,
            ..FlameParams::HIDDEN
        };
        FlameFrame {
            main,
            core_scale: scale * FLAME_CORE_SCALE,
            left: FlameParams::HIDDEN,
            right: FlameParams::HIDDEN,
            smoke: (scale <= 0.0).then(smoke_puffs),
        }
    }
}
