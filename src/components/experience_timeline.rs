//! Vertical work-history timeline with expandable detail cards.

use leptos::prelude::*;

use crate::components::icons::{
    IconAward, IconBuilding, IconCalendar, IconChevronDown, IconChevronUp,
};
use crate::state::timeline::TimelineState;

#[cfg(test)]
#[path = "experience_timeline_test.rs"]
mod experience_timeline_test;

#[derive(Clone, Copy)]
struct Experience {
    id: &'static str,
    role: &'static str,
    company: &'static str,
    duration: &'static str,
    description: &'static str,
    responsibilities: &'static [&'static str],
    achievements: &'static [&'static str],
    skills: &'static [&'static str],
}

const EXPERIENCES: &[Experience] = &[
    Experience {
        id: "exp1",
        role: "Senior Systems Engineer",
        company: "Driftline Networks",
        duration: "Mar 2023 - Present",
        description: "Building and operating a global edge-cache fleet in Rust, \
                      serving static and dynamic content for latency-sensitive customers.",
        responsibilities: &[
            "Designing the zero-copy ingest path between the TLS terminator and the cache store",
            "Running capacity planning and failover drills across 14 points of presence",
            "Leading incident response as primary on-call for the data plane",
            "Mentoring two engineers through their first production Rust services",
        ],
        achievements: &[
            "Cut p99 cache-read latency from 40ms to 9ms by removing cross-thread hops",
            "Reduced fleet spend 25% by consolidating onto io_uring-based nodes",
        ],
        skills: &["Rust", "Tokio", "gRPC", "Prometheus", "Kubernetes"],
    },
    Experience {
        id: "exp2",
        role: "Software Engineer",
        company: "Harbor Data",
        duration: "Jun 2020 - Feb 2023",
        description: "Storage-engine team for a time-series database, focused on the \
                      write path and on keeping queries fast under compaction pressure.",
        responsibilities: &[
            "Rewrote the LSM compaction scheduler to prioritize overlapping key ranges",
            "Implemented write-ahead-log replay and crash-recovery testing",
            "Extended the query planner with pushdown for downsampling aggregates",
            "Built internal flamegraph tooling used across three teams",
        ],
        achievements: &[
            "Quadrupled sustained write throughput on the standard benchmark fleet",
            "Led the C++ to Rust migration of the ingest service with zero downtime",
        ],
        skills: &["Rust", "C++", "RocksDB", "PostgreSQL", "Grafana"],
    },
    Experience {
        id: "exp3",
        role: "Backend Engineer",
        company: "Quartet Labs",
        duration: "Aug 2017 - May 2020",
        description: "Payments platform APIs: idempotent money movement, ledgering, \
                      and the compliance plumbing underneath it all.",
        responsibilities: &[
            "Designed idempotency-key handling for the public payments API",
            "Maintained the double-entry ledger service and its reconciliation jobs",
            "Prepared systems and evidence for annual PCI-DSS audits",
            "Owned the CI pipeline and progressive-rollout deploy tooling",
        ],
        achievements: &[
            "Processed $30M in the first year without a severity-1 incident",
            "Cut median deploy time from 40 minutes to 8",
        ],
        skills: &["Go", "Rust", "Kafka", "Terraform", "AWS"],
    },
];

/// Work-history section. One card per role, alternating sides of a center
/// rail; at most one card shows its expanded detail at a time.
#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let timeline = RwSignal::new(TimelineState::new());

    view! {
        <div class="timeline">
            <header class="section__header">
                <h2 class="section__title">"Professional Experience"</h2>
                <p class="section__subtitle">
                    "A decade of building storage engines, edge infrastructure, and the platforms underneath payments."
                </p>
            </header>

            <div class="timeline__body">
                <div class="timeline__rail" aria-hidden="true"></div>
                <div class="timeline__entries">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            let exp = *exp;
                            let side = if index % 2 == 0 {
                                "timeline__entry--left"
                            } else {
                                "timeline__entry--right"
                            };
                            let is_open = move || timeline.with(|t| t.is_expanded(exp.id));
                            let on_toggle = move |_| timeline.update(|t| t.toggle(exp.id));

                            view! {
                                <div class=format!("timeline__entry {side}")>
                                    <div class="timeline__dot" aria-hidden="true"></div>
                                    <article class="card timeline__card">
                                        <header class="timeline__card-header">
                                            <div>
                                                <h3 class="timeline__role">{exp.role}</h3>
                                                <span class="timeline__company">
                                                    <IconBuilding size=16 />
                                                    {exp.company}
                                                </span>
                                            </div>
                                            <span class="badge badge--outline timeline__duration">
                                                <IconCalendar size=14 />
                                                {exp.duration}
                                            </span>
                                        </header>

                                        <p class="timeline__description">{exp.description}</p>

                                        {move || {
                                            is_open()
                                                .then(|| {
                                                    view! {
                                                        <div class="timeline__detail">
                                                            <div>
                                                                <h4 class="timeline__detail-heading">"Responsibilities"</h4>
                                                                <ul class="timeline__detail-list">
                                                                    {exp.responsibilities
                                                                        .iter()
                                                                        .map(|item| view! { <li>{*item}</li> })
                                                                        .collect_view()}
                                                                </ul>
                                                            </div>
                                                            <div>
                                                                <h4 class="timeline__detail-heading">
                                                                    <IconAward size=16 />
                                                                    "Achievements"
                                                                </h4>
                                                                <ul class="timeline__detail-list">
                                                                    {exp.achievements
                                                                        .iter()
                                                                        .map(|item| view! { <li>{*item}</li> })
                                                                        .collect_view()}
                                                                </ul>
                                                            </div>
                                                            <div>
                                                                <h4 class="timeline__detail-heading">"Skills"</h4>
                                                                <div class="badge-row">
                                                                    {exp.skills
                                                                        .iter()
                                                                        .map(|skill| {
                                                                            view! { <span class="badge badge--secondary">{*skill}</span> }
                                                                        })
                                                                        .collect_view()}
                                                                </div>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                        }}

                                        <button class="btn btn--ghost timeline__toggle" on:click=on_toggle>
                                            {move || {
                                                if is_open() {
                                                    view! {
                                                        <IconChevronUp size=16 />
                                                        <span>"Show Less"</span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <IconChevronDown size=16 />
                                                        <span>"Show More"</span>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </button>
                                    </article>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
