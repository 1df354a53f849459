//! Section visibility watching: feeds DOM events into the section tracker.
//!
//! Picks the best strategy the browser offers. `IntersectionObserver` fires
//! an entry per section crossing the half-visible threshold; when the API is
//! missing, a window scroll listener probes section geometry instead. Both
//! paths converge on [`SectionTracker`], which owns the selection rules.
//!
//! All DOM access is gated behind `#[cfg(target_arch = "wasm32")]` since it
//! requires a browser environment; native builds no-op.
//!
//! LIFECYCLE
//! =========
//! `start` installs exactly one watcher (idempotent). `watch`/`unwatch`
//! wrap registration plus per-element observation. `stop` tears down the
//! observer or listener and drops the JS callback, which must stay alive in
//! the thread-local slot for as long as the browser may invoke it.

use leptos::prelude::RwSignal;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::{Update, WithUntracked};
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use crate::state::tracker::{SECTION_VISIBILITY_THRESHOLD, SectionSpan};
use crate::state::tracker::SectionTracker;

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Distance below the viewport top, in pixels, of the scroll-probe reference
/// point. Biasing the probe downward makes a section claim the nav highlight
/// a little before its top edge reaches the top of the screen.
pub const SCROLL_PROBE_OFFSET_PX: f64 = 200.0;

#[cfg(target_arch = "wasm32")]
enum SectionWatch {
    Observer {
        observer: web_sys::IntersectionObserver,
        /// Held only to keep the JS-side callback alive.
        _callback: Closure<dyn FnMut(js_sys::Array)>,
    },
    Probe {
        listener: Closure<dyn FnMut()>,
    },
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static WATCH: RefCell<Option<SectionWatch>> = const { RefCell::new(None) };
}

/// Install the visibility watcher, preferring `IntersectionObserver`.
/// Calling again while a watcher is installed is a no-op.
pub fn start(tracker: RwSignal<SectionTracker>) {
    #[cfg(target_arch = "wasm32")]
    {
        let installed = WATCH.with(|slot| slot.borrow().is_some());
        if installed {
            return;
        }

        let watch = if observer_supported() {
            log::debug!("tracking sections with IntersectionObserver");
            install_observer(tracker)
        } else {
            None
        }
        .or_else(|| {
            log::debug!("tracking sections with scroll probing");
            install_probe(tracker)
        });

        WATCH.with(|slot| *slot.borrow_mut() = watch);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracker;
    }
}

/// Register a section and start observing its element. When no element with
/// `id` is in the document the whole call is a no-op, so sections that never
/// rendered cannot show up in the tracker.
pub fn watch(tracker: RwSignal<SectionTracker>, id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = element_by_id(id) else { return };

        tracker.update(|t| t.register(id));
        WATCH.with(|slot| match &*slot.borrow() {
            Some(SectionWatch::Observer { observer, .. }) => observer.observe(&element),
            // Measure immediately; a restored scroll position would otherwise
            // show the wrong section until the first scroll event.
            Some(SectionWatch::Probe { .. }) => run_scroll_probe(tracker),
            None => {}
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (tracker, id);
    }
}

/// Stop observing a section and drop it from the tracker. Unknown ids are
/// ignored.
pub fn unwatch(tracker: RwSignal<SectionTracker>, id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        WATCH.with(|slot| {
            if let Some(SectionWatch::Observer { observer, .. }) = &*slot.borrow() {
                if let Some(element) = element_by_id(id) {
                    observer.unobserve(&element);
                }
            }
        });
        tracker.update(|t| t.unregister(id));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (tracker, id);
    }
}

/// Tear down whichever watcher `start` installed.
pub fn stop() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(watch) = WATCH.with(|slot| slot.borrow_mut().take()) else {
            return;
        };
        match watch {
            SectionWatch::Observer { observer, .. } => observer.disconnect(),
            SectionWatch::Probe { listener } => {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn observer_supported() -> bool {
    web_sys::window().map_or(false, |window| {
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    })
}

#[cfg(target_arch = "wasm32")]
fn install_observer(tracker: RwSignal<SectionTracker>) -> Option<SectionWatch> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
            let id = entry.target().id();
            let entering = entry.is_intersecting();
            let ratio = entry.intersection_ratio();
            tracker.update(|t| {
                t.record_intersection(&id, ratio, entering);
            });
        }
    });

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SECTION_VISIBILITY_THRESHOLD));

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .ok()?;
    Some(SectionWatch::Observer { observer, _callback: callback })
}

#[cfg(target_arch = "wasm32")]
fn install_probe(tracker: RwSignal<SectionTracker>) -> Option<SectionWatch> {
    let window = web_sys::window()?;
    let listener = Closure::<dyn FnMut()>::new(move || run_scroll_probe(tracker));
    window
        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(SectionWatch::Probe { listener })
}

/// Measure every registered section and let the tracker pick the one under
/// the probe point. Geometry is read fresh each event: cached offsets go
/// stale whenever an expanded card or a resize reflows the page.
#[cfg(target_arch = "wasm32")]
fn run_scroll_probe(tracker: RwSignal<SectionTracker>) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    let page_offset = window.scroll_y().unwrap_or(0.0);
    let probe_y = page_offset + SCROLL_PROBE_OFFSET_PX;

    let ids = tracker.with_untracked(|t| t.registered().to_vec());
    let mut spans = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(element) = document.get_element_by_id(&id) {
            let rect = element.get_bounding_client_rect();
            spans.push(SectionSpan {
                id,
                top: rect.top() + page_offset,
                height: rect.height(),
            });
        }
    }

    tracker.update(|t| {
        t.record_scroll_probe(probe_y, &spans);
    });
}

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
}
