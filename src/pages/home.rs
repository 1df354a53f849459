//! The single page: renders every section in document order and keeps the
//! section tracker observing them for as long as the page is mounted.

use leptos::prelude::*;

use crate::components::achievements::AchievementsSection;
use crate::components::certifications::CertificationsSection;
use crate::components::contact::ContactSection;
use crate::components::education::EducationSection;
use crate::components::experience_timeline::ExperienceTimeline;
use crate::components::hero::HeroSection;
use crate::components::nav_bar::NavBar;
use crate::components::project_showcase::ProjectShowcase;
use crate::state::sections::SECTIONS;
use crate::state::tracker::SectionTracker;
use crate::util::visibility;

fn section_body(id: &str) -> AnyView {
    match id {
        "experience" => view! { <ExperienceTimeline /> }.into_any(),
        "projects" => view! { <ProjectShowcase /> }.into_any(),
        "education" => view! { <EducationSection /> }.into_any(),
        "certifications" => view! { <CertificationsSection /> }.into_any(),
        "achievements" => view! { <AchievementsSection /> }.into_any(),
        "contact" => view! { <ContactSection /> }.into_any(),
        _ => view! { <HeroSection /> }.into_any(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let tracker = expect_context::<RwSignal<SectionTracker>>();

    // Sections can only be observed once their elements are in the DOM, so
    // watching starts from an effect rather than at component construction.
    Effect::new(move || {
        visibility::start(tracker);
        for section in SECTIONS {
            visibility::watch(tracker, section.id);
        }
    });

    on_cleanup(move || {
        for section in SECTIONS {
            visibility::unwatch(tracker, section.id);
        }
        visibility::stop();
    });

    view! {
        <main class="page">
            {SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <section id=section.id class="page__section">
                            {section_body(section.id)}
                        </section>
                    }
                })
                .collect_view()}
        </main>
        <NavBar />
    }
}
