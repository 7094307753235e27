use crate::effect::Effect;

/// Coarse stage of the experience, as reported to hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FlowStage {
    Card,
    Waiting,
    Scene,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlowPhase {
    /// Greeting card on screen.
    Card,
    /// Card dismissed, intro music playing, continue button pending.
    Waiting { dismissed_at: f64 },
    /// 3D scene mounted; scene time counts from `started_at`.
    Scene { started_at: f64 },
}

/// Greeting card → continue button → scene.
#[derive(Clone, Debug)]
pub struct IntroFlow {
    phase: FlowPhase,
    button_delay_secs: f64,
}

impl IntroFlow {
    pub fn new(button_delay_secs: f64) -> Self {
        Self {
            phase: FlowPhase::Card,
            button_delay_secs,
        }
    }

    /// Start directly in the scene.
    pub fn in_scene(started_at: f64) -> Self {
        Self {
            phase: FlowPhase::Scene { started_at },
            button_delay_secs: 0.0,
        }
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    pub fn stage(&self) -> FlowStage {
        match self.phase {
            FlowPhase::Card => FlowStage::Card,
            FlowPhase::Waiting { .. } => FlowStage::Waiting,
            FlowPhase::Scene { .. } => FlowStage::Scene,
        }
    }

    pub fn dismiss_card(&mut self, now: f64, effects: &mut Vec<Effect>) -> bool {
        if self.phase != FlowPhase::Card {
            return false;
        }
        self.phase = FlowPhase::Waiting { dismissed_at: now };
        log::info!("[flow] card dismissed at {:.2}s", now);
        effects.push(Effect::PlayIntroMusic);
        true
    }

    pub fn continue_visible(&self, now: f64) -> bool {
        match self.phase {
            FlowPhase::Waiting { dismissed_at } => now - dismissed_at >= self.button_delay_secs,
            _ => false,
        }
    }

    /// Enter the scene; refused until the continue button is visible.
    pub fn continue_to_scene(&mut self, now: f64, effects: &mut Vec<Effect>) -> bool {
        if !self.continue_visible(now) {
            return false;
        }
        self.phase = FlowPhase::Scene { started_at: now };
        log::info!("[flow] scene started at {:.2}s", now);
        effects.push(Effect::StopIntroMusic);
        effects.push(Effect::PlaySceneMusic);
        true
    }

    /// Seconds since the scene mounted, `None` before that.
    pub fn scene_time(&self, now: f64) -> Option<f64> {
        match self.phase {
            FlowPhase::Scene { started_at } => Some((now - started_at).max(0.0)),
            _ => None,
        }
    }
}
