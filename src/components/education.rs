//! Education section: degree cards with period badges.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Education {
    degree: &'static str,
    school: &'static str,
    period: &'static str,
}

const EDUCATION: &[Education] = &[
    Education {
        degree: "B.S. Computer Science",
        school: "Oregon State University",
        period: "2013 - 2017",
    },
    Education {
        degree: "Exchange Year, Systems Programming",
        school: "ETH Z\u{fc}rich",
        period: "2015 - 2016",
    },
];

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <div class="education">
            <header class="section__header">
                <h2 class="section__title">"Education"</h2>
            </header>
            <div class="education__list">
                {EDUCATION
                    .iter()
                    .map(|entry| {
                        view! {
                            <article class="card education__card">
                                <div class="education__row">
                                    <h3 class="education__degree">{entry.degree}</h3>
                                    <span class="badge badge--secondary">{entry.period}</span>
                                </div>
                                <p class="education__school">{entry.school}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
