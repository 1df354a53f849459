//! Smooth scrolling to a section by element id.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical clearance between the viewport top and a scrolled-to section's
/// top edge, compensating for the page's fixed navigation chrome.
pub const NAV_SCROLL_OFFSET_PX: f64 = 64.0;

/// Convert an element's viewport-space top edge to the document-space scroll
/// target, [`NAV_SCROLL_OFFSET_PX`] above the element. `rect_top` comes from
/// `getBoundingClientRect` (negative once the element is above the
/// viewport), `page_offset` is the current `scrollY`. Clamped at zero so the
/// first section never asks for a negative scroll.
#[must_use]
pub fn scroll_target_top(rect_top: f64, page_offset: f64) -> f64 {
    (rect_top + page_offset - NAV_SCROLL_OFFSET_PX).max(0.0)
}

/// Smooth-scroll the window so the section with `id` sits at the top of the
/// viewport. A missing element is a silent no-op: nav entries may point at
/// sections that are not mounted yet.
pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollToOptions};

        let Some(window) = web_sys::window() else { return };
        let Some(element) = window
            .document()
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            return;
        };

        let top = scroll_target_top(
            element.get_bounding_client_rect().top(),
            window.scroll_y().unwrap_or(0.0),
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}
