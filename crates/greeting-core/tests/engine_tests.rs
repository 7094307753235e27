// Scenario tests driving the whole engine the way a host would.

use greeting_core::*;

const DT: f64 = 1.0 / 60.0;

fn scene_engine() -> GreetingEngine {
    let config = EngineConfig {
        skip_intro: true,
        ..EngineConfig::default()
    };
    GreetingEngine::new(config).expect("engine")
}

/// Tick at 60 fps over `(from, to]`, collecting every snapshot.
fn run(
    engine: &mut GreetingEngine,
    from: f64,
    to: f64,
    fx: &mut Vec<Effect>,
) -> Vec<Snapshot> {
    let start = (from / DT).round() as i64 + 1;
    let end = (to / DT).round() as i64;
    (start..=end)
        .map(|i| engine.tick(Some(i as f64 * DT), fx))
        .collect()
}

fn count(fx: &[Effect], wanted: Effect) -> usize {
    fx.iter().filter(|e| **e == wanted).count()
}

#[test]
fn early_release_shows_hint_for_one_second() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.0, PressSource::Mouse, &mut fx);
    assert_eq!(fx, vec![Effect::StartProgressTimer]);
    assert_eq!(e.interaction_state(), InteractionState::Blowing);

    run(&mut e, 0.0, 1.0, &mut fx);
    fx.clear();
    e.press_end(1.0, PressSource::Mouse, &mut fx);
    assert_eq!(fx.len(), 2);
    assert_eq!(fx[0], Effect::StopProgressTimer);
    match fx[1] {
        Effect::BlowTooWeak { held_secs } => assert!((held_secs - 1.0).abs() < 1e-6),
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(e.interaction_state(), InteractionState::Idle);
    assert_eq!(e.gesture_progress(), 0.0);
    assert!(e.show_hard_try_message());

    let snaps = run(&mut e, 1.0, 1.95, &mut fx);
    assert!(snaps.iter().all(|s| s.ui.show_hard_try_message));
    let snaps = run(&mut e, 1.95, 2.05, &mut fx);
    assert!(!snaps.last().unwrap().ui.show_hard_try_message);
    assert_eq!(e.interaction_state(), InteractionState::Idle);
}

#[test]
fn release_just_before_required_does_not_extinguish() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.0, PressSource::Mouse, &mut fx);
    e.press_end(REQUIRED_BLOW_SECS - 1e-3, PressSource::Mouse, &mut fx);
    assert_eq!(count(&fx, Effect::Extinguished), 0);
    assert!(e.show_hard_try_message());
    assert_eq!(e.interaction_state(), InteractionState::Idle);
}

#[test]
fn holding_through_required_duration_extinguishes_once() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.0, PressSource::Touch(1), &mut fx);

    let snaps = run(&mut e, 0.0, 4.0, &mut fx);
    assert_eq!(count(&fx, Effect::Extinguished), 1);
    assert_eq!(count(&fx, Effect::StopProgressTimer), 1);
    let stop = fx.iter().position(|f| *f == Effect::StopProgressTimer);
    let out = fx.iter().position(|f| *f == Effect::Extinguished);
    assert!(stop < out);

    let first_out = snaps
        .iter()
        .find(|s| s.interaction_state == InteractionState::Extinguished)
        .expect("extinguished");
    assert!(first_out.elapsed_secs >= REQUIRED_BLOW_SECS - 1e-9);
    assert!(first_out.elapsed_secs < REQUIRED_BLOW_SECS + 2.0 * DT);
    assert!(first_out.ui.show_celebration);
    assert!(!first_out.ui.show_blow_button);
    assert_eq!(first_out.gesture_progress, 0.0);

    // progress never fell while the session was live
    let live: Vec<f32> = snaps
        .iter()
        .take_while(|s| s.interaction_state == InteractionState::Blowing)
        .map(|s| s.gesture_progress)
        .collect();
    assert!(live.windows(2).all(|w| w[0] <= w[1]));

    // terminal: releasing and pressing again changes nothing
    fx.clear();
    e.press_end(4.0, PressSource::Touch(1), &mut fx);
    e.press_start(4.1, PressSource::Mouse, &mut fx);
    assert!(fx.is_empty());
    assert_eq!(e.interaction_state(), InteractionState::Extinguished);
    assert_eq!(e.gesture_progress(), 0.0);
}

#[test]
fn poll_timer_completes_the_gesture_while_rendering_stalls() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.0, PressSource::Pointer(3), &mut fx);
    let mut prev = 0.0;
    let mut done_at = None;
    for k in 1..=60 {
        let stamp = k as f64 * 0.05;
        let p = e.poll_gesture(stamp, &mut fx);
        if e.interaction_state() == InteractionState::Extinguished {
            done_at = Some(stamp);
            break;
        }
        assert!(p >= prev);
        prev = p;
    }
    let done_at = done_at.expect("poll should finish the hold");
    assert!(done_at >= REQUIRED_BLOW_SECS - 1e-9 && done_at <= REQUIRED_BLOW_SECS + 0.05 + 1e-9);
    assert_eq!(count(&fx, Effect::Extinguished), 1);

    // the next frame after the stall is clamped but sees the final state
    let snap = e.tick(Some(done_at + 1.0), &mut fx);
    assert_eq!(snap.delta_secs, MAX_DELTA_SECS);
    assert_eq!(snap.interaction_state, InteractionState::Extinguished);
    assert_eq!(count(&fx, Effect::Extinguished), 1);
}

#[test]
fn mouse_and_touch_collapse_into_one_session() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.0, PressSource::Touch(0), &mut fx);
    e.press_start(0.01, PressSource::Mouse, &mut fx);
    assert_eq!(count(&fx, Effect::StartProgressTimer), 1);

    e.press_end(0.5, PressSource::Touch(0), &mut fx);
    assert_eq!(e.interaction_state(), InteractionState::Blowing);
    e.press_end(0.6, PressSource::Mouse, &mut fx);
    assert_eq!(e.interaction_state(), InteractionState::Idle);
    assert_eq!(count(&fx, Effect::StopProgressTimer), 1);
}

#[test]
fn release_all_cancels_the_hold() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.0, PressSource::Pointer(1), &mut fx);
    e.release_all(0.3, &mut fx);
    assert_eq!(e.interaction_state(), InteractionState::Idle);
    assert!(fx.contains(&Effect::BlowTooWeak { held_secs: 0.3 }));
}

#[test]
fn reveal_stages_follow_scene_time() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    let snap = run(&mut e, 0.0, 2.0, &mut fx).pop().unwrap();
    let cloth = snap.transform(ELEMENT_CLOTH).unwrap();
    let bouquet = snap.transform(ELEMENT_BOUQUET).unwrap();
    assert!(cloth.scale > 0.9);
    assert_eq!(bouquet.scale, 0.0);
    assert_eq!(snap.element_transforms.len(), SCENE_ELEMENTS.len());
    assert!(fx.is_empty());
}

#[test]
fn extinguished_flame_shrinks_every_tick_then_smokes() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.0, PressSource::Mouse, &mut fx);
    let snaps = run(&mut e, 0.0, 5.0, &mut fx);
    let after: Vec<&Snapshot> = snaps
        .iter()
        .filter(|s| s.interaction_state == InteractionState::Extinguished)
        .collect();
    assert!(after.windows(2).all(|w| w[1].flames.main.scale <= w[0].flames.main.scale));
    let zero_at = after
        .iter()
        .position(|s| s.flames.main.scale == 0.0)
        .expect("flame reaches zero");
    assert!(zero_at <= (1.0 / EXTINGUISH_DECREMENT) as usize + 1);
    assert!(after[zero_at].flames.smoke.is_some());
}

#[test]
fn camera_closes_in_while_blowing() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.0, PressSource::Mouse, &mut fx);
    let snap = run(&mut e, 0.0, 2.0, &mut fx).pop().unwrap();
    assert_eq!((snap.camera.min_distance, snap.camera.max_distance), CAMERA_CLOSE_DISTANCE);
    assert!(snap.camera.position.distance(CAMERA_CLOSE_UP_POSITION) < 0.01);
    assert!(snap.ui.show_vignette);
    assert_eq!(snap.ui.blow_button_label, BLOW_LABEL_ACTIVE);
    assert!(!e.sync_user_camera(glam::Vec3::new(0.0, 0.0, 9.0), glam::Vec3::ZERO));
}

#[test]
fn intro_gates_the_scene() {
    let mut e = GreetingEngine::new(EngineConfig::default()).unwrap();
    let mut fx = Vec::new();
    let snap = e.tick(Some(0.0), &mut fx);
    assert_eq!(snap.stage, FlowStage::Card);
    assert!(snap.ui.show_card);
    assert_eq!(snap.scene_secs, None);

    e.press_start(0.1, PressSource::Mouse, &mut fx);
    e.press_end(0.2, PressSource::Mouse, &mut fx);
    assert!(fx.is_empty());

    assert!(e.dismiss_card(1.0, &mut fx));
    let snap = run(&mut e, 0.0, 6.0, &mut fx).pop().unwrap();
    assert_eq!(snap.stage, FlowStage::Waiting);
    assert!(snap.ui.show_continue_button);
    assert_eq!(snap.balloons.len(), BALLOON_COUNT);

    assert!(e.continue_to_scene(6.0, &mut fx));
    assert_eq!(
        fx,
        vec![
            Effect::PlayIntroMusic,
            Effect::StopIntroMusic,
            Effect::PlaySceneMusic
        ]
    );
    let snap = run(&mut e, 6.0, 7.0, &mut fx).pop().unwrap();
    assert_eq!(snap.stage, FlowStage::Scene);
    assert!(snap.balloons.is_empty());
    assert!(snap.ui.show_blow_button);
    assert!((snap.scene_secs.unwrap() - 1.0).abs() < 1e-6);
    // cloth started at scene time 0.5, not at engine time 0.5
    assert!(snap.transform(ELEMENT_CLOTH).unwrap().scale > 0.0);
    assert_eq!(snap.transform(ELEMENT_CAKE).unwrap().position.y, CAKE_DROP_HEIGHT);
}

#[test]
fn shutdown_stops_the_timer_for_a_live_hold() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.shutdown(&mut fx);
    assert!(fx.is_empty());
    e.press_start(0.0, PressSource::Mouse, &mut fx);
    e.shutdown(&mut fx);
    assert_eq!(fx, vec![Effect::StartProgressTimer, Effect::StopProgressTimer]);
    assert_eq!(e.interaction_state(), InteractionState::Idle);
    assert!(!e.show_hard_try_message());
    assert_eq!(e.gesture_progress(), 0.0);
}

#[test]
fn exact_hold_from_offset_start_extinguishes_without_hint() {
    for k in 1..200 {
        let start = k as f64 * 0.013;
        let mut e = scene_engine();
        let mut fx = Vec::new();
        e.tick(Some(0.0), &mut fx);
        e.tick(Some(start), &mut fx);
        e.press_start(start, PressSource::Mouse, &mut fx);
        e.press_end(start + REQUIRED_BLOW_SECS, PressSource::Mouse, &mut fx);
        assert_eq!(
            e.interaction_state(),
            InteractionState::Extinguished,
            "hold from {}",
            start
        );
        assert!(!fx.iter().any(|f| matches!(f, Effect::BlowTooWeak { .. })));
    }
}

#[test]
fn keyboard_and_pointer_share_one_hold() {
    let mut e = scene_engine();
    let mut fx = Vec::new();
    e.tick(Some(0.0), &mut fx);
    e.press_start(0.2, PressSource::Keyboard, &mut fx);
    e.press_start(0.4, PressSource::Pointer(3), &mut fx);
    e.press_end(1.0, PressSource::Keyboard, &mut fx);
    assert_eq!(e.interaction_state(), InteractionState::Blowing);
    e.press_end(REQUIRED_BLOW_SECS + 0.3, PressSource::Pointer(3), &mut fx);
    assert_eq!(e.interaction_state(), InteractionState::Extinguished);
    assert_eq!(count(&fx, Effect::StartProgressTimer), 1);
}
