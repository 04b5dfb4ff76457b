use std::f64::consts::{FRAC_PI_2, TAU};

use super::*;
use ck::PathEl;

fn canvas64() -> CpuCanvas {
    CpuCanvas::new(Canvas {
        width: 64,
        height: 64,
    })
    .unwrap()
}

fn approx_point(p: ck::Point, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
}

#[test]
fn rejects_invalid_canvas() {
    assert!(
        CpuCanvas::new(Canvas {
            width: 0,
            height: 10
        })
        .is_err()
    );
}

#[test]
fn restore_pops_transform_and_styles() {
    let mut c = canvas64();
    c.set_line_width(3.0);
    c.save();
    c.translate(10.0, 5.0);
    c.set_line_width(7.0);
    c.set_line_cap(LineCap::Round);
    c.restore();

    assert_eq!(c.state.transform, ck::Affine::IDENTITY);
    assert_eq!(c.state.line_width, 3.0);
    assert_eq!(c.state.cap, LineCap::Butt);

    // Unbalanced restore is ignored.
    c.restore();
    assert_eq!(c.state.line_width, 3.0);
}

#[test]
fn path_points_use_the_current_transform() {
    let mut c = canvas64();
    c.translate(20.0, 30.0);
    c.rotate(FRAC_PI_2);
    c.begin_path();
    c.move_to(0.0, 0.0);
    c.line_to(10.0, 0.0);

    let els = c.path.elements();
    assert_eq!(els.len(), 2);
    match (els[0], els[1]) {
        (PathEl::MoveTo(a), PathEl::LineTo(b)) => {
            assert!(approx_point(a, 20.0, 30.0));
            assert!(approx_point(b, 20.0, 40.0));
        }
        other => panic!("unexpected path {other:?}"),
    }
}

#[test]
fn full_circle_arc_starts_on_the_rim() {
    let mut c = canvas64();
    c.translate(32.0, 32.0);
    c.begin_path();
    c.arc(0.0, 0.0, 10.0, 0.0, TAU);

    let els = c.path.elements();
    assert!(els.len() > 2);
    let PathEl::MoveTo(start) = els[0] else {
        panic!("arc must open a subpath");
    };
    assert!(approx_point(start, 42.0, 32.0));
}

#[test]
fn invalid_line_width_is_ignored() {
    let mut c = canvas64();
    c.set_line_width(-1.0);
    c.set_line_width(f64::NAN);
    assert_eq!(c.state.line_width, 1.0);
}

#[test]
fn fill_and_stroke_reach_the_pixels() {
    let mut c = canvas64();
    c.set_fill_style(Color::rgb(0xBD, 0xBD, 0xBD));
    c.fill_rect(0.0, 0.0, 64.0, 64.0);

    c.set_stroke_style(Color::rgb(255, 0, 0));
    c.set_line_width(8.0);
    c.begin_path();
    c.move_to(0.0, 32.0);
    c.line_to(64.0, 32.0);
    c.stroke();

    let frame = c.finish();
    assert_eq!(frame.width, 64);
    assert_eq!(frame.height, 64);
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 64 * 64 * 4);
    assert_eq!(frame.pixel(2, 2), Some([0xBD, 0xBD, 0xBD, 255]));
    assert_eq!(frame.pixel(32, 31), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(64, 0), None);
}
