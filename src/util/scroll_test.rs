#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn target_sits_nav_clearance_above_the_element() {
    // Section 400px below the viewport top, page already scrolled 1000px.
    let element_top = 400.0 + 1000.0;
    let target = scroll_target_top(400.0, 1000.0);
    assert!(target < element_top);
    assert_eq!(target, element_top - NAV_SCROLL_OFFSET_PX);
}

#[test]
fn target_handles_sections_above_the_viewport() {
    assert_eq!(scroll_target_top(-600.0, 1000.0), 400.0 - NAV_SCROLL_OFFSET_PX);
}

#[test]
fn target_never_goes_negative() {
    assert_eq!(scroll_target_top(-50.0, 0.0), 0.0);
    // The topmost section starts inside the clearance band.
    assert_eq!(scroll_target_top(0.0, 0.0), 0.0);
}

#[test]
fn scroll_to_missing_section_is_a_no_op() {
    scroll_to_section("nowhere");
}
