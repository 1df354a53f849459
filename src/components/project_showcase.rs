//! Project gallery: a card grid where each card opens a detail dialog.

use leptos::prelude::*;

use crate::components::icons::{IconExternalLink, IconGithub};
use crate::state::showcase::ShowcaseState;

#[cfg(test)]
#[path = "project_showcase_test.rs"]
mod project_showcase_test;

#[derive(Clone, Copy)]
struct Project {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    categories: &'static [&'static str],
    tech_stack: &'static [&'static str],
    image: &'static str,
    detailed_description: &'static str,
    github_link: Option<&'static str>,
    demo_link: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
    Project {
        id: "tidewatch",
        title: "Tidewatch",
        description: "A terminal UI for tailing, filtering, and correlating structured logs \
                      across a fleet of machines.",
        categories: &["CLI", "Observability"],
        tech_stack: &["Rust", "ratatui", "Tokio", "serde"],
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&q=80",
        detailed_description: "Tidewatch streams newline-delimited JSON logs from any number of \
                               hosts over SSH, normalizes the records, and renders them in a \
                               single scrollback with per-field filtering and cross-host \
                               correlation by request id. Filters compile to a small predicate \
                               VM so even complex queries keep up with tens of thousands of \
                               lines per second on a laptop.",
        github_link: Some("https://github.com/cjm-systems/tidewatch"),
        demo_link: None,
    },
    Project {
        id: "reef",
        title: "Reef",
        description: "An embedded key-value store with an io_uring write path and \
                      crash-safe compaction.",
        categories: &["Storage", "Library"],
        tech_stack: &["Rust", "io_uring", "crc32fast", "criterion"],
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&q=80",
        detailed_description: "Reef is a single-node LSM storage library built to find out how \
                               far a fully asynchronous write path can go. Writes land in a \
                               checksummed log via io_uring, memtables flush without stalling \
                               readers, and compaction is torn-write safe by construction. The \
                               benchmark suite tracks write amplification and tail latency \
                               across every commit.",
        github_link: Some("https://github.com/cjm-systems/reef"),
        demo_link: None,
    },
    Project {
        id: "driftcell",
        title: "Driftcell",
        description: "A browser playground for cellular automata, compiled to WebAssembly \
                      and rendered on canvas.",
        categories: &["WebAssembly", "Graphics"],
        tech_stack: &["Rust", "WebAssembly", "Leptos", "Canvas"],
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&q=80",
        detailed_description: "Driftcell runs classic and custom cellular automata rules at \
                               full frame rate by keeping the grid in a Rust-owned buffer and \
                               blitting dirty regions to a canvas. Rules are written in a tiny \
                               expression language, compiled in the browser, and shareable as \
                               URL fragments. The whole app ships as a static page.",
        github_link: Some("https://github.com/cjm-systems/driftcell"),
        demo_link: Some("https://driftcell.caseymorgan.dev"),
    },
    Project {
        id: "packrat",
        title: "Packrat",
        description: "A content-addressed build-artifact cache that cut our CI times \
                      by two thirds.",
        categories: &["Infrastructure", "Networking"],
        tech_stack: &["Rust", "axum", "S3", "zstd"],
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=800&q=80",
        detailed_description: "Packrat fronts an S3 bucket with a content-addressed HTTP cache \
                               for compiler and linker outputs. Artifacts are chunked, \
                               zstd-compressed, and deduplicated across branches, so a typical \
                               pull request only uploads what it actually changed. Runs as a \
                               single static binary next to the CI runners.",
        github_link: Some("https://github.com/cjm-systems/packrat"),
        demo_link: None,
    },
];

fn project_by_id(id: &str) -> Option<Project> {
    PROJECTS.iter().copied().find(|p| p.id == id)
}

/// Project section: grid of cards plus the detail dialog for the selected
/// project. Clicking a card opens the dialog; the corner GitHub shortcut
/// and the dialog's own buttons handle outbound links.
#[component]
pub fn ProjectShowcase() -> impl IntoView {
    let showcase = RwSignal::new(ShowcaseState::new());

    view! {
        <div class="showcase">
            <header class="section__header">
                <h2 class="section__title">"Projects"</h2>
                <p class="section__subtitle">
                    "Tools and libraries from the last few years, most of them born from a production itch."
                </p>
            </header>

            <div class="showcase__grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        let project = *project;
                        let on_open = move |_| showcase.update(|s| s.open(project.id));

                        view! {
                            <article class="card showcase__card" on:click=on_open>
                                {project
                                    .github_link
                                    .map(|href| {
                                        view! {
                                            <a
                                                class="showcase__github"
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label="View source on GitHub"
                                                on:click=move |ev| ev.stop_propagation()
                                            >
                                                <IconGithub />
                                            </a>
                                        }
                                    })}
                                <div class="showcase__image-wrap">
                                    <img
                                        class="showcase__image"
                                        src=project.image
                                        alt=project.title
                                        loading="lazy"
                                    />
                                </div>
                                <div class="showcase__card-body">
                                    <h3 class="showcase__title">{project.title}</h3>
                                    <div class="badge-row">
                                        {project
                                            .categories
                                            .iter()
                                            .map(|cat| {
                                                view! { <span class="badge badge--secondary">{*cat}</span> }
                                            })
                                            .collect_view()}
                                    </div>
                                    <p class="showcase__description">{project.description}</p>
                                </div>
                                <footer class="showcase__card-footer badge-row">
                                    {project
                                        .tech_stack
                                        .iter()
                                        .map(|tech| {
                                            view! { <span class="badge badge--outline">{*tech}</span> }
                                        })
                                        .collect_view()}
                                </footer>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                showcase
                    .with(|s| s.selected_id().map(str::to_owned))
                    .and_then(|id| project_by_id(&id))
                    .map(|project| {
                        view! {
                            <ProjectDialog
                                project=project
                                on_close=Callback::new(move |()| showcase.update(|s| s.close()))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Fullscreen detail dialog for one project.
#[component]
fn ProjectDialog(project: Project, on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog showcase__dialog"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <header class="dialog__header">
                    <div>
                        <h2 class="dialog__title">{project.title}</h2>
                        <div class="badge-row">
                            {project
                                .categories
                                .iter()
                                .map(|cat| view! { <span class="badge badge--secondary">{*cat}</span> })
                                .collect_view()}
                        </div>
                    </div>
                    <button class="dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </header>

                <div class="dialog__image-wrap">
                    <img class="dialog__image" src=project.image alt=project.title />
                </div>

                <p class="dialog__description">{project.detailed_description}</p>

                <h4 class="dialog__subheading">"Technologies Used"</h4>
                <div class="badge-row">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| view! { <span class="badge">{*tech}</span> })
                        .collect_view()}
                </div>

                <footer class="dialog__actions">
                    {project
                        .github_link
                        .map(|href| {
                            view! {
                                <a
                                    class="btn btn--outline"
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <IconGithub size=16 />
                                    "View on GitHub"
                                </a>
                            }
                        })}
                    {project
                        .demo_link
                        .map(|href| {
                            view! {
                                <a class="btn btn--primary" href=href target="_blank" rel="noopener noreferrer">
                                    <IconExternalLink size=16 />
                                    "Live Demo"
                                </a>
                            }
                        })}
                </footer>
            </div>
        </div>
    }
}
