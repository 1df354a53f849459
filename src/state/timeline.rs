//! Expand/collapse state for the experience timeline.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

/// At most one timeline entry is expanded at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineState {
    expanded: Option<String>,
}

impl TimelineState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one entry: expanding it collapses whichever entry was open,
    /// toggling the open entry collapses it.
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_owned());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }
}
