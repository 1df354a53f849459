//! The page's section manifest.
//!
//! Every full-height section rendered by the home page appears here in
//! document order. The nav bar, the section tracker registration loop, and
//! the scroll probe all iterate this one table so the set of sections can
//! never drift between them.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// One navigable page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    /// DOM id of the `<section>` element, also used as the nav target.
    pub id: &'static str,
    /// Label shown in the bottom navigation bar.
    pub label: &'static str,
}

/// All sections, top to bottom.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "experience", label: "Experience" },
    Section { id: "projects", label: "Projects" },
    Section { id: "education", label: "Education" },
    Section { id: "certifications", label: "Certifications" },
    Section { id: "achievements", label: "Achievements" },
    Section { id: "contact", label: "Contact" },
];

/// Id of the topmost section, the initial active section before any
/// visibility event arrives.
#[must_use]
pub fn first_section_id() -> &'static str {
    SECTIONS[0].id
}
