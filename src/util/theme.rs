//! Theme initialization and toggle, wired to the browser.
//!
//! Reads the stored preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser
//! environment; the resolution and toggle rules themselves live in
//! [`crate::state::theme`] where they are natively testable.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage can be unavailable (private
//! browsing, quota) and every write is discarded on failure so the
//! in-memory theme stays authoritative for the session.

#[cfg(target_arch = "wasm32")]
use crate::state::theme::THEME_STORAGE_KEY;
use crate::state::theme::Theme;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Resolve the startup theme: stored preference first, then the system
/// `prefers-color-scheme` hint, then light.
#[must_use]
pub fn read_preference() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::Light,
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        Theme::initial(stored.as_deref(), system_dark)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
#[must_use]
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, next.as_str());
            }
        }
    }
    next
}
