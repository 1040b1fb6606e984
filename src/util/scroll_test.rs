#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// Threshold boundary
// =============================================================

#[test]
fn threshold_is_400_units() {
    assert_eq!(BACK_TO_TOP_THRESHOLD, 400.0);
}

#[test]
fn offset_399_keeps_control_hidden() {
    assert!(!past_threshold(399.0));
}

#[test]
fn offset_exactly_400_keeps_control_hidden() {
    assert!(!past_threshold(400.0));
}

#[test]
fn offset_401_shows_control() {
    assert!(past_threshold(401.0));
}

#[test]
fn top_of_page_keeps_control_hidden() {
    assert!(!past_threshold(0.0));
}

// =============================================================
// Native fallbacks
// =============================================================

#[test]
fn scroll_to_top_is_noop_but_callable() {
    scroll_to_top();
}
