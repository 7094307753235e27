use crate::constants::HOLD_TOLERANCE_SECS;
use crate::effect::Effect;
use crate::gesture::{GestureConfig, GestureEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InteractionState {
    #[default]
    Idle,
    Blowing,
    /// Terminal.
    Extinguished,
}

/// Idle/Blowing/Extinguished plus the transient "blow harder" hint.
#[derive(Clone, Debug)]
pub struct InteractionMachine {
    state: InteractionState,
    show_hard_try_message: bool,
    hard_try_expires_at: f64,
    required_secs: f64,
    message_secs: f64,
}

impl InteractionMachine {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            state: InteractionState::Idle,
            show_hard_try_message: false,
            hard_try_expires_at: 0.0,
            required_secs: config.required_secs,
            message_secs: config.hard_try_message_secs,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_extinguished(&self) -> bool {
        self.state == InteractionState::Extinguished
    }

    pub fn show_hard_try_message(&self) -> bool {
        self.show_hard_try_message
    }

    pub fn hard_try_expires_at(&self) -> Option<f64> {
        self.show_hard_try_message
            .then_some(self.hard_try_expires_at)
    }

    /// A gesture session has started. Returns false once extinguished.
    pub fn press_started(&mut self) -> bool {
        match self.state {
            InteractionState::Extinguished => false,
            _ => {
                self.state = InteractionState::Blowing;
                self.show_hard_try_message = false;
                true
            }
        }
    }

    pub fn apply(&mut self, event: GestureEvent, now: f64, effects: &mut Vec<Effect>) {
        match event {
            GestureEvent::Success { held_secs } => {
                if self.is_extinguished() {
                    return;
                }
                self.state = InteractionState::Extinguished;
                self.show_hard_try_message = false;
                log::info!("[interaction] candle extinguished after {:.2}s hold", held_secs);
                effects.push(Effect::Extinguished);
            }
            GestureEvent::Cancelled { held_secs } => {
                if self.state != InteractionState::Blowing {
                    return;
                }
                self.state = InteractionState::Idle;
                if held_secs + HOLD_TOLERANCE_SECS < self.required_secs {
                    self.show_hard_try_message = true;
                    self.hard_try_expires_at = now + self.message_secs;
                    log::info!("[interaction] blow too weak ({:.2}s)", held_secs);
                    effects.push(Effect::BlowTooWeak { held_secs });
                }
            }
        }
    }

    /// Abandon a live hold without judging it (host teardown).
    pub fn abort(&mut self) {
        if self.state == InteractionState::Blowing {
            self.state = InteractionState::Idle;
        }
    }

    /// Expire the hint once its deadline has passed.
    pub fn tick(&mut self, now: f64) {
        if self.show_hard_try_message && now >= self.hard_try_expires_at {
            self.show_hard_try_message = false;
        }
    }
}
