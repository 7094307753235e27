//! Read-only frame state handed to the rendering and UI collaborators.

use crate::balloons::BalloonFrame;
use crate::camera::CameraPose;
use crate::flame::FlameFrame;
use crate::flow::FlowStage;
use crate::interaction::InteractionState;
use crate::reveal::{ElementId, Transform};
use fnv::FnvHashMap;

pub const BLOW_LABEL_IDLE: &str = "Hold to Blow";
pub const BLOW_LABEL_ACTIVE: &str = "Blowing...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UiFlags {
    pub show_card: bool,
    pub show_continue_button: bool,
    pub show_blow_button: bool,
    pub blow_button_label: &'static str,
    pub show_vignette: bool,
    pub show_hard_try_message: bool,
    pub show_celebration: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Snapshot {
    pub elapsed_secs: f64,
    pub delta_secs: f32,
    pub scene_secs: Option<f64>,
    pub stage: FlowStage,
    pub interaction_state: InteractionState,
    pub gesture_progress: f32,
    pub element_transforms: FnvHashMap<ElementId, Transform>,
    pub flames: FlameFrame,
    pub camera: CameraPose,
    pub ui: UiFlags,
    pub balloons: Vec<BalloonFrame>,
}

impl Snapshot {
    pub fn transform(&self, id: &str) -> Option<Transform> {
        self.element_transforms.get(id).copied()
    }
}
