//! Browser glue: DOM, storage, and navigation wiring for the pure state in
//! `crate::state`. Everything here no-ops off wasm so the crate stays
//! natively testable.

pub mod mailto;
pub mod scroll;
pub mod theme;
pub mod visibility;
