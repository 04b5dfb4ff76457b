use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn nodes_are_spread_in_columns() {
    let layout = NodeLayout::new(
        Canvas {
            width: 500,
            height: 300,
        },
        5,
    );
    assert_eq!(layout.gap(), 100.0);
    assert_eq!(layout.center(0), Point::new(50.0, 150.0));
    assert_eq!(layout.center(4), Point::new(450.0, 150.0));
    assert!(approx(layout.radius(), 100.0 / 3.0));
    assert_eq!(layout.line_width(), 5.0);
}

#[test]
fn radius_is_bounded_by_height() {
    let layout = NodeLayout::new(
        Canvas {
            width: 1000,
            height: 60,
        },
        2,
    );
    assert!(approx(layout.radius(), 20.0));
}

#[test]
fn resting_arms_form_a_cross() {
    let state = State::new(4);
    for arm in 0..4 {
        assert!(approx(arm_angle(&state, arm), arm as f64 * FRAC_PI_2));
    }
}

#[test]
fn finished_step_turns_each_arm_by_half_spacing() {
    let mut state = State::new(4);
    state.start_updating();
    while state.is_stepping() {
        state.update();
    }
    for arm in 0..4 {
        assert!(approx(
            arm_angle(&state, arm),
            arm as f64 * FRAC_PI_2 + FRAC_PI_4
        ));
    }
}
