//! Achievements section: accent-border highlight cards.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Achievement {
    title: &'static str,
    detail: &'static str,
}

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "RustConf 2024 Speaker",
        detail: "Talked through the lock-free structures in a production edge cache's hot \
                 path, and what they cost to get right.",
    },
    Achievement {
        title: "Open Source Maintainer",
        detail: "Maintain two ecosystem crates with 40k+ monthly downloads and review for an \
                 async runtime's I/O driver.",
    },
    Achievement {
        title: "Advent of Code, Global Top 100",
        detail: "Placed in the global top 100 two years running, solving every puzzle in Rust.",
    },
];

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <div class="achievements">
            <header class="section__header">
                <h2 class="section__title">"Achievements"</h2>
            </header>
            <div class="achievements__list">
                {ACHIEVEMENTS
                    .iter()
                    .map(|item| {
                        view! {
                            <article class="card achievements__card">
                                <h3 class="achievements__title">{item.title}</h3>
                                <p class="achievements__detail">{item.detail}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
