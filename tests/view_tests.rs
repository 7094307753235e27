// Host-side tests for the snapshot-to-overlay mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/view.rs"]
mod view;

use greeting_core::{
    Effect, EngineConfig, GreetingEngine, PressSource, Snapshot, BLOW_LABEL_ACTIVE,
    BLOW_LABEL_IDLE,
};
use view::*;

fn scene_engine() -> GreetingEngine {
    GreetingEngine::new(EngineConfig {
        skip_intro: true,
        ..EngineConfig::default()
    })
    .unwrap()
}

fn frame(engine: &mut GreetingEngine, t: f64) -> Snapshot {
    let mut fx = Vec::new();
    engine.tick(Some(t), &mut fx)
}

#[test]
fn progress_percent_rounds_and_clamps() {
    assert_eq!(progress_percent(0.0), 0);
    assert_eq!(progress_percent(0.504), 50);
    assert_eq!(progress_percent(0.996), 100);
    assert_eq!(progress_percent(1.7), 100);
    assert_eq!(progress_percent(-0.2), 0);
    assert_eq!(progress_percent(f32::NAN), 0);
}

#[test]
fn only_space_holds_the_blow_button() {
    assert!(is_blow_key(" "));
    assert!(is_blow_key("Spacebar"));
    assert!(!is_blow_key("Enter"));
    assert!(!is_blow_key("s"));
}

#[test]
fn progress_bar_style_caps_width() {
    assert_eq!(progress_bar_style(42), "width: 42%");
    assert_eq!(progress_bar_style(250), "width: 100%");
}

#[test]
fn card_stage_shows_only_the_card() {
    let mut engine = GreetingEngine::new(EngineConfig::default()).unwrap();
    let snap = frame(&mut engine, 0.0);
    let view = OverlayView::from_snapshot(&snap);
    for (panel, visible) in PANELS.iter().zip(view.panels) {
        assert_eq!(visible, *panel == Panel::Card, "{:?}", panel);
    }
}

#[test]
fn holding_shows_vignette_and_active_label() {
    let mut engine = scene_engine();
    let mut fx: Vec<Effect> = Vec::new();
    frame(&mut engine, 0.0);
    engine.press_start(0.5, PressSource::Mouse, &mut fx);
    let snap = frame(&mut engine, 0.5 + 1.15);

    let view = OverlayView::from_snapshot(&snap);
    assert!(panel_visible(Panel::Vignette, &snap.ui));
    assert!(panel_visible(Panel::BlowButton, &snap.ui));
    assert_eq!(view.button.label, BLOW_LABEL_ACTIVE);
    assert!(view.button.pressed);
    assert_eq!(view.button.percent, 50);
}

#[test]
fn early_release_shows_hint_then_idle_label() {
    let mut engine = scene_engine();
    let mut fx = Vec::new();
    frame(&mut engine, 0.0);
    engine.press_start(0.5, PressSource::Mouse, &mut fx);
    engine.press_end(1.0, PressSource::Mouse, &mut fx);
    let snap = frame(&mut engine, 1.1);

    let view = OverlayView::from_snapshot(&snap);
    assert!(panel_visible(Panel::HardTryMessage, &snap.ui));
    assert!(!panel_visible(Panel::Vignette, &snap.ui));
    assert_eq!(view.button.label, BLOW_LABEL_IDLE);
    assert!(!view.button.pressed);
}

#[test]
fn extinguished_swaps_button_for_celebration() {
    let mut engine = scene_engine();
    let mut fx = Vec::new();
    frame(&mut engine, 0.0);
    engine.press_start(0.5, PressSource::Mouse, &mut fx);
    engine.press_end(3.0, PressSource::Mouse, &mut fx);
    let snap = frame(&mut engine, 3.05);

    assert!(panel_visible(Panel::Celebration, &snap.ui));
    assert!(!panel_visible(Panel::BlowButton, &snap.ui));
}

#[test]
fn changed_panels_reports_only_differences() {
    let mut engine = scene_engine();
    let mut fx = Vec::new();
    let before = OverlayView::from_snapshot(&frame(&mut engine, 0.0));
    assert_eq!(before.changed_panels(None).len(), PANELS.len());
    assert!(before.changed_panels(Some(&before)).is_empty());

    engine.press_start(0.1, PressSource::Mouse, &mut fx);
    let after = OverlayView::from_snapshot(&frame(&mut engine, 0.2));
    assert_eq!(
        after.changed_panels(Some(&before)),
        vec![(Panel::Vignette, true)]
    );
}
