#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn card() -> Rect {
    Rect::new(100.0, 200.0, 400.0, 200.0)
}

#[test]
fn top_left_corner_is_zero_percent() {
    assert_eq!(card_offset_percent(Point::new(100.0, 200.0), card()), Some((0.0, 0.0)));
}

#[test]
fn centre_is_fifty_percent() {
    assert_eq!(card_offset_percent(Point::new(300.0, 300.0), card()), Some((50.0, 50.0)));
}

#[test]
fn bottom_right_corner_is_hundred_percent() {
    assert_eq!(card_offset_percent(Point::new(500.0, 400.0), card()), Some((100.0, 100.0)));
}

#[test]
fn pointer_outside_card_is_not_clamped() {
    let (mx, my) = card_offset_percent(Point::new(0.0, 500.0), card()).unwrap();
    assert!(approx_eq(mx, -25.0));
    assert!(approx_eq(my, 150.0));
}

#[test]
fn collapsed_card_is_skipped() {
    let hidden = Rect::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(card_offset_percent(Point::new(10.0, 10.0), hidden), None);
}
