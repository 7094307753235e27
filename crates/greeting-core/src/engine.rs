use crate::balloons::{balloon_frames, make_balloons, Balloon};
use crate::camera::{CameraConfig, CameraController};
use crate::clock::{Clock, ClockState};
use crate::constants::{BALLOON_COUNT, BALLOON_SEED, CONTINUE_BUTTON_DELAY_SECS};
use crate::effect::Effect;
use crate::flame::{FlameAnimator, FlameConfig, FlameFrame};
use crate::flow::{FlowStage, IntroFlow};
use crate::gesture::{GestureConfig, GestureEvent, GestureTracker};
use crate::interaction::{InteractionMachine, InteractionState};
use crate::press::{LatchEdge, PressLatch, PressSource};
use crate::reveal::{RevealSequencer, RevealTimeline, TimelineError};
use crate::snapshot::{Snapshot, UiFlags, BLOW_LABEL_ACTIVE, BLOW_LABEL_IDLE};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub gesture: GestureConfig,
    pub camera: CameraConfig,
    pub flame: FlameConfig,
    pub continue_delay_secs: f64,
    pub balloon_seed: u64,
    /// Start in the scene instead of on the greeting card.
    pub skip_intro: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            camera: CameraConfig::default(),
            flame: FlameConfig::default(),
            continue_delay_secs: CONTINUE_BUTTON_DELAY_SECS,
            balloon_seed: BALLOON_SEED,
            skip_intro: false,
        }
    }
}

/// Drives every time-derived component from host input.
///
/// Hosts call `tick` once per rendered frame and forward press input as it
/// arrives. Every call appends requested side effects to `effects` instead of
/// performing them, in the order they must be applied.
pub struct GreetingEngine {
    clock: Clock,
    flow: IntroFlow,
    latch: PressLatch,
    gesture: GestureTracker,
    interaction: InteractionMachine,
    reveal: RevealSequencer,
    flame: FlameAnimator,
    camera: CameraController,
    balloons: Vec<Balloon>,
    last_flames: FlameFrame,
}

impl GreetingEngine {
    /// Engine for the picnic scene.
    pub fn new(config: EngineConfig) -> Result<Self, TimelineError> {
        Ok(Self::with_timeline(config, RevealTimeline::picnic()?))
    }

    pub fn with_timeline(config: EngineConfig, timeline: RevealTimeline) -> Self {
        let flow = if config.skip_intro {
            IntroFlow::in_scene(0.0)
        } else {
            IntroFlow::new(config.continue_delay_secs)
        };
        log::info!(
            "[engine] {} reveal stages, hold {:.1}s to blow",
            timeline.len(),
            config.gesture.required_secs
        );
        Self {
            clock: Clock::new(),
            flow,
            latch: PressLatch::new(),
            gesture: GestureTracker::new(config.gesture),
            interaction: InteractionMachine::new(&config.gesture),
            reveal: RevealSequencer::new(timeline),
            flame: FlameAnimator::new(config.flame),
            camera: CameraController::new(config.camera),
            balloons: make_balloons(config.balloon_seed, BALLOON_COUNT),
            last_flames: FlameFrame::default(),
        }
    }

    pub fn clock(&self) -> ClockState {
        self.clock.state()
    }

    pub fn stage(&self) -> FlowStage {
        self.flow.stage()
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn gesture_progress(&self) -> f32 {
        self.gesture.progress()
    }

    pub fn show_hard_try_message(&self) -> bool {
        self.interaction.show_hard_try_message()
    }

    pub fn poll_interval_ms(&self) -> i32 {
        self.gesture.config().poll_interval_ms
    }

    pub fn dismiss_card(&mut self, stamp: f64, effects: &mut Vec<Effect>) -> bool {
        let now = self.clock.observe(stamp);
        self.flow.dismiss_card(now, effects)
    }

    pub fn continue_to_scene(&mut self, stamp: f64, effects: &mut Vec<Effect>) -> bool {
        let now = self.clock.observe(stamp);
        self.flow.continue_to_scene(now, effects)
    }

    pub fn press_start(&mut self, stamp: f64, source: PressSource, effects: &mut Vec<Effect>) {
        if self.flow.stage() != FlowStage::Scene {
            return;
        }
        if self.latch.press(source) != Some(LatchEdge::Pressed) {
            return;
        }
        let now = self.clock.observe(stamp);
        if self.gesture.start_press(now, self.interaction.is_extinguished()) {
            self.interaction.press_started();
            log::info!("[interaction] blowing");
            effects.push(Effect::StartProgressTimer);
        }
    }

    pub fn press_end(&mut self, stamp: f64, source: PressSource, effects: &mut Vec<Effect>) {
        if self.latch.release(source) == Some(LatchEdge::Released) {
            self.finish_press(stamp, effects);
        }
    }

    /// Release every held source at once (pointer leave, cancel, blur).
    pub fn release_all(&mut self, stamp: f64, effects: &mut Vec<Effect>) {
        if self.latch.release_all() == Some(LatchEdge::Released) {
            self.finish_press(stamp, effects);
        }
    }

    fn finish_press(&mut self, stamp: f64, effects: &mut Vec<Effect>) {
        let now = self.clock.observe(stamp);
        if let Some(event) = self.gesture.end_press(now) {
            self.settle(event, now, effects);
        }
    }

    /// Progress refresh from the host's fixed-period timer.
    pub fn poll_gesture(&mut self, stamp: f64, effects: &mut Vec<Effect>) -> f32 {
        let now = self.clock.observe(stamp);
        if let Some(event) = self.gesture.tick(now) {
            self.settle(event, now, effects);
        }
        self.gesture.progress()
    }

    fn settle(&mut self, event: GestureEvent, now: f64, effects: &mut Vec<Effect>) {
        effects.push(Effect::StopProgressTimer);
        self.interaction.apply(event, now, effects);
    }

    /// Drop any live hold without an outcome (host teardown).
    pub fn shutdown(&mut self, effects: &mut Vec<Effect>) {
        self.latch.release_all();
        if self.gesture.abandon() {
            effects.push(Effect::StopProgressTimer);
        }
        self.interaction.abort();
    }

    /// Write back a user-driven orbit pose; ignored while blowing.
    pub fn sync_user_camera(&mut self, position: Vec3, look_at: Vec3) -> bool {
        self.camera
            .sync_user_pose(self.interaction.state(), position, look_at)
    }

    /// Advance one rendered frame.
    pub fn tick(&mut self, stamp: Option<f64>, effects: &mut Vec<Effect>) -> Snapshot {
        let clock = self.clock.tick(stamp);
        let now = clock.elapsed_secs;

        if let Some(event) = self.gesture.tick(now) {
            self.settle(event, now, effects);
        }
        self.interaction.tick(now);

        let state = self.interaction.state();
        let scene_secs = self.flow.scene_time(now);
        let mut balloons = Vec::new();
        match scene_secs {
            Some(t) => {
                self.reveal.step(t, clock.delta_secs);
                self.last_flames = self.flame.step(state, t);
                self.camera.step(state, clock.delta_secs);
            }
            None => balloons = balloon_frames(&self.balloons, now),
        }

        Snapshot {
            elapsed_secs: now,
            delta_secs: clock.delta_secs,
            scene_secs,
            stage: self.flow.stage(),
            interaction_state: state,
            gesture_progress: self.gesture.progress(),
            element_transforms: self.reveal.transforms().collect(),
            flames: self.last_flames,
            camera: self.camera.pose(state),
            ui: self.ui_flags(now, state),
            balloons,
        }
    }

    fn ui_flags(&self, now: f64, state: InteractionState) -> UiFlags {
        let stage = self.flow.stage();
        let in_scene = stage == FlowStage::Scene;
        let extinguished = state == InteractionState::Extinguished;
        let blowing = state == InteractionState::Blowing;
        UiFlags {
            show_card: stage == FlowStage::Card,
            show_continue_button: self.flow.continue_visible(now),
            show_blow_button: in_scene && !extinguished,
            blow_button_label: if blowing {
                BLOW_LABEL_ACTIVE
            } else {
                BLOW_LABEL_IDLE
            },
            show_vignette: blowing,
            show_hard_try_message: self.interaction.show_hard_try_message(),
            show_celebration: extinguished,
        }
    }
}
