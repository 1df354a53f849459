//! # folio
//!
//! A single-page portfolio site rendered entirely in the browser with
//! Leptos. The page is a fixed stack of sections (hero, experience,
//! projects, education, certifications, achievements, contact) with a
//! sticky bottom navigation bar whose highlight follows scrolling.
//!
//! The crate is split so the interesting logic stays off the DOM:
//!
//! - [`state`]: pure models (section tracking, theme, expand/select state),
//!   natively testable.
//! - [`util`]: browser glue that feeds those models from DOM events and
//!   applies their decisions back (scrolling, `data-theme`, storage).
//! - [`components`] and [`pages`]: the Leptos view layer.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
