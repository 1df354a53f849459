//! UI components for the single-page portfolio.

pub mod achievements;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience_timeline;
pub mod hero;
pub mod icons;
pub mod nav_bar;
pub mod profile;
pub mod project_showcase;
