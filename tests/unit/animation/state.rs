use super::*;

fn run_to_completion(state: &mut State) -> (usize, usize) {
    let mut ticks = 0;
    let mut completions = 0;
    while ticks < 1_000 {
        ticks += 1;
        match state.update() {
            StepUpdate::Completed => {
                completions += 1;
                break;
            }
            StepUpdate::Advanced => {}
            StepUpdate::Idle => panic!("state went idle without completing"),
        }
    }
    (ticks, completions)
}

#[test]
fn idle_update_is_a_no_op() {
    let mut s = State::new(4);
    for _ in 0..100 {
        assert_eq!(s.update(), StepUpdate::Idle);
    }
    assert_eq!(s.scale(), 0.0);
    assert_eq!(s.prev_scale(), 0.0);
    assert_eq!(s.dir(), 0);
}

#[test]
fn forward_step_snaps_to_one_after_forty_ticks() {
    let mut s = State::new(4);
    assert!(s.start_updating());
    let (ticks, completions) = run_to_completion(&mut s);
    assert_eq!(ticks, 40);
    assert_eq!(completions, 1);
    assert_eq!(s.scale(), 1.0);
    assert_eq!(s.prev_scale(), 1.0);
    assert_eq!(s.dir(), 0);

    // Further ticks never complete again.
    assert_eq!(s.update(), StepUpdate::Idle);
    assert_eq!(s.scale(), 1.0);
}

#[test]
fn backward_step_snaps_to_zero() {
    let mut s = State::new(4);
    s.start_updating();
    run_to_completion(&mut s);

    assert!(s.start_updating());
    assert_eq!(s.dir(), -1);
    let (ticks, completions) = run_to_completion(&mut s);
    assert_eq!(ticks, 40);
    assert_eq!(completions, 1);
    assert_eq!(s.scale(), 0.0);
    assert_eq!(s.prev_scale(), 0.0);
}

#[test]
fn direction_follows_resting_value() {
    let mut s = State::new(4);
    s.start_updating();
    assert_eq!(s.direction(), Some(Direction::Forward));
    assert_eq!(s.dir(), 1);
    run_to_completion(&mut s);

    s.start_updating();
    assert_eq!(s.direction(), Some(Direction::Backward));
}

#[test]
fn start_while_stepping_is_ignored() {
    let mut s = State::new(4);
    assert!(s.start_updating());
    s.update();
    let before = s.clone();
    assert!(!s.start_updating());
    assert_eq!(s, before);
}

#[test]
fn step_length_scales_with_factor() {
    let mut s = State::new(2);
    s.start_updating();
    let (ticks, _) = run_to_completion(&mut s);
    assert!((20..=21).contains(&ticks), "ticks = {ticks}");
}

#[test]
fn arms_sweep_in_sequence() {
    let mut s = State::new(4);
    s.start_updating();
    // 15 ticks * 0.025 = 0.375 -> scale * factor = 1.5
    for _ in 0..15 {
        s.update();
    }
    assert!((s.arm_progress(0) - 1.0).abs() < 1e-9);
    assert!((s.arm_progress(1) - 0.5).abs() < 1e-9);
    assert_eq!(s.arm_progress(2), 0.0);
    assert_eq!(s.arm_progress(3), 0.0);
}

#[test]
fn direction_helpers() {
    assert_eq!(Direction::Forward.sign(), 1);
    assert_eq!(Direction::Backward.as_f64(), -1.0);
    assert_eq!(Direction::Forward.reversed(), Direction::Backward);
}
