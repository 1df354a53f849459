//! Fixed bottom navigation bar: one button per page section plus the theme
//! toggle. The active section highlight follows the section tracker.

use leptos::prelude::*;

use crate::components::icons::{
    IconAward, IconBriefcase, IconFolderOpen, IconGraduationCap, IconHome, IconMail, IconMoon,
    IconShieldCheck, IconSun,
};
use crate::state::sections::{SECTIONS, first_section_id};
use crate::state::theme::Theme;
use crate::state::tracker::SectionTracker;

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

fn item_class(active: bool) -> &'static str {
    if active {
        "nav-bar__item nav-bar__item--active"
    } else {
        "nav-bar__item"
    }
}

/// The id to highlight: the tracker's answer, or the topmost section before
/// anything has registered (first paint, sections not yet mounted).
fn highlighted_id(active: Option<&str>) -> &str {
    active.unwrap_or_else(first_section_id)
}

fn theme_toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    }
}

fn section_icon(id: &str) -> AnyView {
    match id {
        "experience" => view! { <IconBriefcase /> }.into_any(),
        "projects" => view! { <IconFolderOpen /> }.into_any(),
        "education" => view! { <IconGraduationCap /> }.into_any(),
        "certifications" => view! { <IconShieldCheck /> }.into_any(),
        "achievements" => view! { <IconAward /> }.into_any(),
        "contact" => view! { <IconMail /> }.into_any(),
        _ => view! { <IconHome /> }.into_any(),
    }
}

/// Sticky bottom navigation. Clicking an item smooth-scrolls to its section;
/// the highlight only moves once the tracker reports the section active.
#[component]
pub fn NavBar() -> impl IntoView {
    let tracker = expect_context::<RwSignal<SectionTracker>>();
    let theme = expect_context::<RwSignal<Theme>>();

    let on_toggle_theme = move |_| theme.update(|t| *t = crate::util::theme::toggle(*t));

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__items">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let section = *section;
                        let is_active = move || {
                            tracker.with(|t| highlighted_id(t.active_id()) == section.id)
                        };
                        let on_click = move |_| crate::util::scroll::scroll_to_section(section.id);

                        view! {
                            <button
                                class=move || item_class(is_active())
                                on:click=on_click
                                aria-label=section.label
                            >
                                {section_icon(section.id)}
                                <span class="nav-bar__item-label">{section.label}</span>
                                {move || {
                                    is_active()
                                        .then(|| {
                                            view! {
                                                <span class="nav-bar__indicator" aria-hidden="true"></span>
                                            }
                                        })
                                }}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="nav-bar__theme-toggle"
                on:click=on_toggle_theme
                aria-label=move || theme_toggle_label(theme.get())
            >
                {move || {
                    if theme.get().is_dark() {
                        view! { <IconSun /> }.into_any()
                    } else {
                        view! { <IconMoon /> }.into_any()
                    }
                }}
            </button>
        </nav>
    }
}
