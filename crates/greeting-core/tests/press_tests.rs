use greeting_core::*;

#[test]
fn concurrent_sources_collapse_to_one_press() {
    let mut latch = PressLatch::new();
    assert_eq!(latch.press(PressSource::Touch(1)), Some(LatchEdge::Pressed));
    assert_eq!(latch.press(PressSource::Mouse), None);
    assert_eq!(latch.press(PressSource::Touch(1)), None);
    assert_eq!(latch.held_count(), 2);

    assert_eq!(latch.release(PressSource::Touch(1)), None);
    assert!(latch.is_held());
    assert_eq!(latch.release(PressSource::Mouse), Some(LatchEdge::Released));
    assert!(!latch.is_held());
}

#[test]
fn unknown_release_is_ignored() {
    let mut latch = PressLatch::new();
    assert_eq!(latch.release(PressSource::Pointer(7)), None);
    latch.press(PressSource::Pointer(1));
    assert_eq!(latch.release(PressSource::Pointer(2)), None);
    assert!(latch.is_held());
}

#[test]
fn release_all_ends_the_logical_press_once() {
    let mut latch = PressLatch::new();
    assert_eq!(latch.release_all(), None);
    latch.press(PressSource::Pointer(1));
    latch.press(PressSource::Pointer(2));
    latch.press(PressSource::Keyboard);
    assert_eq!(latch.release_all(), Some(LatchEdge::Released));
    assert_eq!(latch.release_all(), None);
    assert_eq!(latch.press(PressSource::Pointer(1)), Some(LatchEdge::Pressed));
}
