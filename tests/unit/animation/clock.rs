use super::*;

const MS: Duration = Duration::from_millis(1);

#[test]
fn interval_fires_on_each_period() {
    let mut clock = ManualClock::new();
    let h = clock.set_interval(50 * MS);
    assert_eq!(clock.next_due(), Some(50 * MS));

    assert_eq!(clock.pop_due(120 * MS), Some(h));
    assert_eq!(clock.now(), 50 * MS);
    assert_eq!(clock.pop_due(120 * MS), Some(h));
    assert_eq!(clock.now(), 100 * MS);
    assert_eq!(clock.pop_due(120 * MS), None);
}

#[test]
fn cleared_interval_never_fires_again() {
    let mut clock = ManualClock::new();
    let h = clock.set_interval(10 * MS);
    assert_eq!(clock.pop_due(Duration::MAX), Some(h));
    clock.clear_interval(h);
    assert!(!clock.is_live(h));
    assert_eq!(clock.pop_due(Duration::MAX), None);

    // Clearing twice is harmless.
    clock.clear_interval(h);
    assert_eq!(clock.live_intervals(), 0);
}

#[test]
fn ties_go_to_first_registered() {
    let mut clock = ManualClock::new();
    let a = clock.set_interval(20 * MS);
    let b = clock.set_interval(20 * MS);
    assert_eq!(clock.pop_due(Duration::MAX), Some(a));
    assert_eq!(clock.pop_due(Duration::MAX), Some(b));
    assert_eq!(clock.pop_due(Duration::MAX), Some(a));
}

#[test]
fn advance_skips_missed_ticks() {
    let mut clock = ManualClock::new();
    let h = clock.set_interval(50 * MS);
    clock.advance_to(130 * MS);
    assert_eq!(clock.now(), 130 * MS);
    assert_eq!(clock.next_due(), Some(150 * MS));
    assert_eq!(clock.pop_due(Duration::MAX), Some(h));
    assert_eq!(clock.now(), 150 * MS);

    // Moving backwards is ignored.
    clock.advance_to(10 * MS);
    assert_eq!(clock.now(), 150 * MS);
}

#[test]
fn new_interval_starts_from_current_time() {
    let mut clock = ManualClock::new();
    clock.advance_to(1_000 * MS);
    clock.set_interval(50 * MS);
    assert_eq!(clock.next_due(), Some(1_050 * MS));
}

#[test]
fn advance_far_ahead_resumes_at_or_after_target() {
    // More than u64::MAX nanoseconds (~584 years) in one jump.
    let far = Duration::from_secs(1_000 * 365 * 24 * 3600);
    let mut clock = ManualClock::new();
    let h = clock.set_interval(3 * MS);
    clock.advance_to(far);
    let due = clock.next_due().unwrap();
    assert!(due >= far);
    assert!(due < far + 3 * MS);

    clock.advance_to(Duration::MAX);
    assert_eq!(clock.next_due(), Some(Duration::MAX));
    assert_eq!(clock.pop_due(Duration::MAX), Some(h));
    assert_eq!(clock.now(), Duration::MAX);
}
