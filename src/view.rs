//! Pure mapping from engine snapshots to what the DOM overlay shows.

use greeting_core::{InteractionState, Snapshot, UiFlags};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Card,
    ContinueButton,
    BlowButton,
    Vignette,
    HardTryMessage,
    Celebration,
}

pub const PANELS: [Panel; 6] = [
    Panel::Card,
    Panel::ContinueButton,
    Panel::BlowButton,
    Panel::Vignette,
    Panel::HardTryMessage,
    Panel::Celebration,
];

pub fn panel_visible(panel: Panel, ui: &UiFlags) -> bool {
    match panel {
        Panel::Card => ui.show_card,
        Panel::ContinueButton => ui.show_continue_button,
        Panel::BlowButton => ui.show_blow_button,
        Panel::Vignette => ui.show_vignette,
        Panel::HardTryMessage => ui.show_hard_try_message,
        Panel::Celebration => ui.show_celebration,
    }
}

/// Keys that hold the blow button down.
#[inline]
pub fn is_blow_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar")
}

/// Whole percent for the hold progress bar; non-finite input reads as empty.
pub fn progress_percent(progress: f32) -> u32 {
    if !progress.is_finite() {
        return 0;
    }
    (progress.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn progress_bar_style(percent: u32) -> String {
    format!("width: {}%", percent.min(100))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlowButtonView {
    pub label: &'static str,
    pub percent: u32,
    pub pressed: bool,
}

impl BlowButtonView {
    pub fn from_snapshot(snap: &Snapshot) -> Self {
        Self {
            label: snap.ui.blow_button_label,
            percent: progress_percent(snap.gesture_progress),
            pressed: snap.interaction_state == InteractionState::Blowing,
        }
    }
}

/// Everything the overlay renders for one frame. Compared frame to frame so
/// the DOM is only written when something changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayView {
    pub panels: [bool; PANELS.len()],
    pub button: BlowButtonView,
}

impl OverlayView {
    pub fn from_snapshot(snap: &Snapshot) -> Self {
        let mut panels = [false; PANELS.len()];
        for (slot, panel) in panels.iter_mut().zip(PANELS) {
            *slot = panel_visible(panel, &snap.ui);
        }
        Self {
            panels,
            button: BlowButtonView::from_snapshot(snap),
        }
    }

    /// Panels whose visibility differs from `prev` (all of them without one).
    pub fn changed_panels(&self, prev: Option<&OverlayView>) -> Vec<(Panel, bool)> {
        PANELS
            .iter()
            .enumerate()
            .filter(|(i, _)| prev.map_or(true, |p| p.panels[*i] != self.panels[*i]))
            .map(|(i, panel)| (*panel, self.panels[i]))
            .collect()
    }
}
