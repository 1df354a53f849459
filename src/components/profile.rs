//! Site owner identity, shared by the hero banner and the contact section.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub github_handle: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_handle: &'static str,
    pub avatar_url: &'static str,
    pub resume_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Casey Morgan",
    tagline: "Systems Engineer | Rust & WebAssembly | Distributed Storage | Open Source Maintainer",
    email: "hello@caseymorgan.dev",
    github_url: "https://github.com/cjm-systems",
    github_handle: "github.com/cjm-systems",
    linkedin_url: "https://www.linkedin.com/in/casey-j-morgan",
    linkedin_handle: "linkedin.com/in/casey-j-morgan",
    avatar_url: "/avatar.jpg",
    resume_url: "/resume.pdf",
};

/// Initials for the monogram avatar: first letter of each name part.
#[must_use]
pub fn monogram(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}
