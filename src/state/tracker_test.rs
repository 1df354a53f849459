use super::*;

fn tracker_with(ids: &[&str]) -> SectionTracker {
    let mut tracker = SectionTracker::new();
    for id in ids {
        tracker.register(id);
    }
    tracker
}

fn span(id: &str, top: f64, height: f64) -> SectionSpan {
    SectionSpan { id: id.to_owned(), top, height }
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn empty_tracker_has_no_active_section() {
    assert_eq!(SectionTracker::new().active_id(), None);
}

#[test]
fn default_tracker_uses_the_standard_threshold() {
    assert_eq!(SectionTracker::default(), SectionTracker::new());
    let mut tracker = SectionTracker::default();
    tracker.register("home");
    tracker.register("experience");
    assert!(!tracker.record_intersection("experience", 0.49, true));
    assert_eq!(tracker.active_id(), Some("home"));
}

#[test]
fn first_registered_section_is_initially_active() {
    let tracker = tracker_with(&["home", "experience", "contact"]);
    assert_eq!(tracker.active_id(), Some("home"));
}

#[test]
fn register_keeps_document_order_and_dedupes() {
    let mut tracker = tracker_with(&["home", "experience"]);
    tracker.register("home");
    assert_eq!(tracker.registered(), ["home", "experience"]);
}

#[test]
fn unregister_unknown_id_is_a_no_op() {
    let mut tracker = tracker_with(&["home", "experience"]);
    tracker.unregister("missing");
    assert_eq!(tracker.registered(), ["home", "experience"]);
    assert_eq!(tracker.active_id(), Some("home"));
}

#[test]
fn unregister_active_section_falls_back_to_first_remaining() {
    let mut tracker = tracker_with(&["home", "experience", "projects"]);
    assert!(tracker.record_intersection("projects", 0.8, true));
    tracker.unregister("projects");
    assert_eq!(tracker.active_id(), Some("home"));
}

#[test]
fn unregister_inactive_section_keeps_the_active_one() {
    let mut tracker = tracker_with(&["home", "experience", "projects"]);
    assert!(tracker.record_intersection("experience", 0.8, true));
    tracker.unregister("projects");
    assert_eq!(tracker.active_id(), Some("experience"));
}

#[test]
fn unregistering_everything_clears_the_active_section() {
    let mut tracker = tracker_with(&["home"]);
    tracker.unregister("home");
    assert_eq!(tracker.active_id(), None);
    assert!(tracker.registered().is_empty());
}

// ============================================================================
// Intersection events
// ============================================================================

#[test]
fn section_at_exactly_half_visibility_becomes_active() {
    let mut tracker = tracker_with(&["home", "experience"]);
    assert!(tracker.record_intersection("experience", 0.5, true));
    assert_eq!(tracker.active_id(), Some("experience"));
}

#[test]
fn section_below_threshold_is_ignored() {
    let mut tracker = tracker_with(&["home", "experience"]);
    assert!(!tracker.record_intersection("experience", 0.49, true));
    assert_eq!(tracker.active_id(), Some("home"));
}

#[test]
fn leaving_events_never_clear_the_active_section() {
    let mut tracker = tracker_with(&["home", "experience"]);
    assert!(tracker.record_intersection("experience", 0.9, true));
    assert!(!tracker.record_intersection("experience", 0.9, false));
    assert_eq!(tracker.active_id(), Some("experience"));
}

#[test]
fn events_for_unregistered_ids_are_ignored() {
    let mut tracker = tracker_with(&["home"]);
    assert!(!tracker.record_intersection("footer", 1.0, true));
    assert_eq!(tracker.active_id(), Some("home"));
}

#[test]
fn latest_qualifying_event_wins() {
    let mut tracker = tracker_with(&["home", "experience", "projects"]);
    assert!(tracker.record_intersection("experience", 0.6, true));
    assert!(tracker.record_intersection("projects", 0.5, true));
    assert_eq!(tracker.active_id(), Some("projects"));
}

#[test]
fn repeated_event_for_the_active_section_reports_no_change() {
    let mut tracker = tracker_with(&["home", "experience"]);
    assert!(tracker.record_intersection("experience", 0.7, true));
    assert!(!tracker.record_intersection("experience", 0.8, true));
    assert_eq!(tracker.active_id(), Some("experience"));
}

#[test]
fn active_section_is_always_registered() {
    let mut tracker = tracker_with(&["home", "experience"]);
    tracker.record_intersection("experience", 1.0, true);
    let active = tracker.active_id().unwrap().to_owned();
    assert!(tracker.is_registered(&active));
}

// ============================================================================
// Scroll-probe fallback
// ============================================================================

#[test]
fn probe_inside_a_span_activates_that_section() {
    let mut tracker = tracker_with(&["home", "experience"]);
    let spans = [span("home", 0.0, 600.0), span("experience", 600.0, 600.0)];
    assert!(tracker.record_scroll_probe(700.0, &spans));
    assert_eq!(tracker.active_id(), Some("experience"));
}

#[test]
fn probe_in_a_gap_keeps_the_previous_section() {
    let mut tracker = tracker_with(&["home", "experience"]);
    let spans = [span("home", 0.0, 600.0), span("experience", 900.0, 600.0)];
    assert!(tracker.record_scroll_probe(100.0, &spans));
    assert!(!tracker.record_scroll_probe(700.0, &spans));
    assert_eq!(tracker.active_id(), Some("home"));
}

#[test]
fn probe_ignores_spans_for_unregistered_ids() {
    let mut tracker = tracker_with(&["home"]);
    let spans = [span("home", 0.0, 600.0), span("footer", 600.0, 600.0)];
    assert!(!tracker.record_scroll_probe(700.0, &spans));
    assert_eq!(tracker.active_id(), Some("home"));
}

#[test]
fn overlapping_spans_resolve_to_the_later_one() {
    let mut tracker = tracker_with(&["home", "experience"]);
    let spans = [span("home", 0.0, 800.0), span("experience", 600.0, 600.0)];
    assert!(tracker.record_scroll_probe(700.0, &spans));
    assert_eq!(tracker.active_id(), Some("experience"));
}

#[test]
fn span_containment_is_half_open() {
    let spans = [span("home", 0.0, 600.0), span("experience", 600.0, 600.0)];
    assert_eq!(active_from_offsets(0.0, &spans), Some("home"));
    assert_eq!(active_from_offsets(599.9, &spans), Some("home"));
    assert_eq!(active_from_offsets(600.0, &spans), Some("experience"));
    assert_eq!(active_from_offsets(1200.0, &spans), None);
}

#[test]
fn probe_mirrors_intersection_selection_for_the_same_layout() {
    // Scrolled so that "experience" fills the viewport: both strategies must
    // agree on the winner.
    let mut by_observer = tracker_with(&["home", "experience"]);
    let mut by_probe = tracker_with(&["home", "experience"]);

    by_observer.record_intersection("experience", 1.0, true);
    let spans = [span("home", 0.0, 600.0), span("experience", 600.0, 600.0)];
    by_probe.record_scroll_probe(800.0, &spans);

    assert_eq!(by_observer.active_id(), by_probe.active_id());
}
