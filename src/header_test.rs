use super::*;
use crate::config::DEFAULT_ELEVATION_OFFSET;

#[test]
fn top_of_page_is_flat() {
    assert!(!is_elevated(0.0, DEFAULT_ELEVATION_OFFSET));
}

#[test]
fn boundary_is_exclusive() {
    assert!(!is_elevated(8.0, DEFAULT_ELEVATION_OFFSET));
    assert!(is_elevated(8.000_001, DEFAULT_ELEVATION_OFFSET));
}

#[test]
fn every_offset_up_to_threshold_is_flat() {
    for px in 0..=8 {
        assert!(!is_elevated(f64::from(px), DEFAULT_ELEVATION_OFFSET), "offset {px}");
    }
}

#[test]
fn every_offset_past_threshold_is_elevated() {
    for px in 9..200 {
        assert!(is_elevated(f64::from(px), DEFAULT_ELEVATION_OFFSET), "offset {px}");
    }
}

#[test]
fn custom_threshold_is_respected() {
    assert!(!is_elevated(30.0, 40.0));
    assert!(is_elevated(41.0, 40.0));
}

#[test]
fn overscroll_is_flat() {
    assert!(!is_elevated(-12.0, DEFAULT_ELEVATION_OFFSET));
}
