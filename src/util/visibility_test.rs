#![cfg(not(target_arch = "wasm32"))]

use leptos::prelude::WithUntracked;

use super::*;

#[test]
fn probe_offset_biases_toward_the_incoming_section() {
    assert!(SCROLL_PROBE_OFFSET_PX > 0.0);
}

#[test]
fn lifecycle_is_noop_but_callable_off_browser() {
    let tracker = RwSignal::new(SectionTracker::new());
    start(tracker);
    watch(tracker, "home");
    unwatch(tracker, "home");
    stop();
    assert_eq!(tracker.with_untracked(|t| t.registered().len()), 0);
}
