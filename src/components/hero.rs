//! Hero banner: avatar, name, tagline, and the primary outbound links.

use leptos::prelude::*;

use crate::components::icons::{IconArrowDown, IconFileText, IconGithub, IconLinkedin, IconMail};
use crate::components::profile::{PROFILE, monogram};

/// Full-height landing banner shown as the first section of the page.
#[component]
pub fn HeroSection() -> impl IntoView {
    let email_href = format!("mailto:{}", PROFILE.email);
    let avatar_failed = RwSignal::new(false);

    view! {
        <div class="hero">
            {move || {
                if avatar_failed.get() {
                    view! {
                        <div class="hero__avatar" aria-hidden="true">
                            {monogram(PROFILE.name)}
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <img
                            class="hero__avatar hero__avatar--photo"
                            src=PROFILE.avatar_url
                            alt=PROFILE.name
                            on:error=move |_| avatar_failed.set(true)
                        />
                    }
                        .into_any()
                }
            }}
            <h1 class="hero__name">{PROFILE.name}</h1>
            <p class="hero__tagline">{PROFILE.tagline}</p>

            <div class="hero__links">
                <a
                    class="btn btn--outline hero__link"
                    href=PROFILE.linkedin_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn profile"
                >
                    <IconLinkedin />
                    "LinkedIn"
                </a>
                <a
                    class="btn btn--outline hero__link"
                    href=PROFILE.github_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub profile"
                >
                    <IconGithub />
                    "GitHub"
                </a>
                <a class="btn btn--outline hero__link" href=email_href aria-label="Email contact">
                    <IconMail />
                    "Email"
                </a>
                <a
                    class="btn btn--primary hero__link"
                    href=PROFILE.resume_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Resume"
                >
                    <IconFileText />
                    "Resume"
                </a>
            </div>

            <div class="hero__scroll-hint" aria-hidden="true">
                <div class="hero__scroll-mouse">
                    <div class="hero__scroll-wheel"></div>
                </div>
                <IconArrowDown size=16 />
            </div>
        </div>
    }
}
