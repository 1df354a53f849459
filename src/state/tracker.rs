//! Scroll-position tracking for the page's sections.
//!
//! DESIGN
//! ======
//! The tracker is the single owner of "which section is active". It knows
//! nothing about the DOM: browser glue in `util::visibility` registers
//! section ids, then feeds it visibility events from whichever strategy the
//! browser supports (`IntersectionObserver`, or scroll-probe geometry when
//! the observer API is missing). Both strategies reduce to the same two
//! entry points, `record_intersection` and `record_scroll_probe`, so the
//! selection rules below are testable without a browser.
//!
//! Rules:
//! - a section becomes active when at least half of it enters the viewport;
//! - when several sections qualify, the most recent event wins;
//! - before any event arrives, the first registered section is active;
//! - events for unregistered ids are ignored.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

/// Fraction of a section that must be visible before it can claim the
/// active slot. Mirrored by the observer threshold in `util::visibility`.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Document-space geometry of one rendered section, measured by the scroll
/// probe at event time rather than cached, so layout changes (an expanded
/// timeline card, a window resize) can never desynchronize it.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    /// Top edge, in document coordinates.
    pub top: f64,
    pub height: f64,
}

/// Which registered section currently owns the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    threshold: f64,
    registered: Vec<String>,
    /// Set only by events. `active_id` falls back to the first registered
    /// section while this is `None`.
    active: Option<String>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(SECTION_VISIBILITY_THRESHOLD)
    }

    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold, registered: Vec::new(), active: None }
    }

    /// Start tracking a section. Registration order is document order and
    /// decides the initial active section. Re-registering an id is a no-op.
    pub fn register(&mut self, id: &str) {
        if !self.is_registered(id) {
            self.registered.push(id.to_owned());
        }
    }

    /// Stop tracking a section. Unknown ids are ignored. If the removed
    /// section was active, the active slot falls back to the first section
    /// still registered (or to none when the registry empties).
    pub fn unregister(&mut self, id: &str) {
        self.registered.retain(|r| r != id);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }

    /// Apply one visibility event. Returns `true` when the active section
    /// changed.
    ///
    /// Only an *entering* event for a *registered* id at or above the
    /// visibility threshold is accepted; everything else is dropped, so a
    /// section leaving the viewport never clears the slot it held.
    pub fn record_intersection(&mut self, id: &str, visible_ratio: f64, entering: bool) -> bool {
        if !entering || visible_ratio < self.threshold || !self.is_registered(id) {
            return false;
        }
        if self.active.as_deref() == Some(id) {
            return false;
        }
        // Last event wins: a newer qualifying section overwrites the holder.
        self.active = Some(id.to_owned());
        true
    }

    /// Apply one scroll-probe measurement. Returns `true` when the active
    /// section changed.
    ///
    /// `probe_y` is a document-space reference point (viewport top plus a
    /// fixed offset); the span containing it wins, later spans beating
    /// earlier ones when layout overlaps.
    pub fn record_scroll_probe(&mut self, probe_y: f64, spans: &[SectionSpan]) -> bool {
        let Some(id) = active_from_offsets(probe_y, spans) else {
            return false;
        };
        if !self.is_registered(id) || self.active.as_deref() == Some(id) {
            return false;
        }
        self.active = Some(id.to_owned());
        true
    }

    /// The currently active section: the last qualifying event's id, or the
    /// first registered section before any event, or `None` when nothing is
    /// registered.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active
            .as_deref()
            .or_else(|| self.registered.first().map(String::as_str))
    }

    #[must_use]
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.iter().any(|r| r == id)
    }
}

/// Pure half of the scroll-probe strategy: scan spans in document order and
/// return the last one containing `probe_y`. Containment is half-open
/// (`top <= probe_y < top + height`) so adjacent sections never both match
/// at the boundary.
#[must_use]
pub fn active_from_offsets(probe_y: f64, spans: &[SectionSpan]) -> Option<&str> {
    let mut current = None;
    for span in spans {
        if probe_y >= span.top && probe_y < span.top + span.height {
            current = Some(span.id.as_str());
        }
    }
    current
}
