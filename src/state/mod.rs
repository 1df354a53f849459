//! Pure page state: every module here is browser-free and natively testable.
//! DOM wiring lives in `crate::util`.

pub mod sections;
pub mod showcase;
pub mod theme;
pub mod timeline;
pub mod tracker;
