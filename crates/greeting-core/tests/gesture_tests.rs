use greeting_core::*;

fn tracker() -> GestureTracker {
    GestureTracker::new(GestureConfig::default())
}

#[test]
fn start_is_idempotent_while_active() {
    let mut g = tracker();
    assert!(g.start_press(0.0, false));
    assert!(!g.start_press(0.5, false));
    assert_eq!(g.session().map(|s| s.started_at), Some(0.0));
}

#[test]
fn start_is_refused_when_locked() {
    let mut g = tracker();
    assert!(!g.start_press(0.0, true));
    assert!(g.session().is_none());
    assert_eq!(g.progress(), 0.0);
}

#[test]
fn progress_rises_monotonically_and_clamps() {
    let mut g = tracker();
    g.start_press(1.0, false);
    let mut prev = 0.0;
    for i in 0..45 {
        let now = 1.0 + i as f64 * 0.05;
        if g.tick(now).is_some() {
            break;
        }
        let p = g.progress();
        assert!(p >= prev && p <= 1.0);
        prev = p;
    }
    assert!(prev > 0.9);
}

#[test]
fn out_of_order_stamp_does_not_reduce_progress() {
    let mut g = tracker();
    g.start_press(0.0, false);
    g.tick(1.0);
    let p = g.progress();
    g.tick(0.5);
    assert_eq!(g.progress(), p);
}

#[test]
fn exact_required_duration_succeeds_once() {
    let mut g = tracker();
    g.start_press(0.0, false);
    assert_eq!(g.tick(2.3), Some(GestureEvent::Success { held_secs: 2.3 }));
    assert!(!g.is_active());
    assert_eq!(g.progress(), 0.0);
    assert_eq!(g.tick(2.4), None);
    assert_eq!(g.end_press(2.5), None);
}

#[test]
fn early_release_cancels_with_held_time() {
    let mut g = tracker();
    g.start_press(0.0, false);
    g.tick(0.5);
    match g.end_press(1.0) {
        Some(GestureEvent::Cancelled { held_secs }) => assert!((held_secs - 1.0).abs() < 1e-9),
        other => panic!("expected cancel, got {other:?}"),
    }
    assert_eq!(g.progress(), 0.0);
}

#[test]
fn release_just_short_of_required_is_a_cancel() {
    let mut g = tracker();
    g.start_press(0.0, false);
    let ev = g.end_press(REQUIRED_BLOW_SECS - 1e-6);
    assert!(matches!(ev, Some(GestureEvent::Cancelled { .. })));
}

#[test]
fn late_release_before_any_tick_counts_as_success() {
    let mut g = tracker();
    g.start_press(0.0, false);
    assert!(matches!(g.end_press(2.4), Some(GestureEvent::Success { .. })));
}

#[test]
fn new_press_after_cancel_starts_from_zero() {
    let mut g = tracker();
    g.start_press(0.0, false);
    g.tick(2.0);
    g.end_press(2.0);
    assert!(g.start_press(3.0, false));
    g.tick(3.1);
    assert!(g.progress() < 0.1);
    // the earlier two seconds do not carry over
    assert_eq!(g.tick(5.0), None);
    assert!(g.tick(5.4).is_some());
}

#[test]
fn abandon_drops_session_silently() {
    let mut g = tracker();
    assert!(!g.abandon());
    g.start_press(0.0, false);
    assert!(g.abandon());
    assert_eq!(g.end_press(1.0), None);
}

#[test]
fn exact_required_hold_succeeds_from_any_start_time() {
    for k in 0..1000 {
        let start = k as f64 * 0.013;
        let mut g = tracker();
        g.start_press(start, false);
        match g.end_press(start + REQUIRED_BLOW_SECS) {
            Some(GestureEvent::Success { .. }) => {}
            other => panic!("hold from {} ended as {:?}", start, other),
        }
    }
}

#[test]
fn exact_required_hold_succeeds_on_tick() {
    for k in 0..1000 {
        let start = 0.7 + k as f64 * 0.0371;
        let mut g = tracker();
        g.start_press(start, false);
        assert!(
            matches!(g.tick(start + REQUIRED_BLOW_SECS), Some(GestureEvent::Success { .. })),
            "tick from {}",
            start
        );
    }
}
