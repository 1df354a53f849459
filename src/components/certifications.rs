//! Certifications section: a grid of outbound credential cards.

use leptos::prelude::*;

use crate::components::icons::IconExternalLink;

#[cfg(test)]
#[path = "certifications_test.rs"]
mod certifications_test;

#[derive(Clone, Copy)]
struct Certification {
    title: &'static str,
    provider: &'static str,
    date: &'static str,
    url: &'static str,
}

const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "CKA: Certified Kubernetes Administrator",
        provider: "Cloud Native Computing Foundation",
        date: "February 2024",
        url: "https://www.cncf.io/training/certification/cka/",
    },
    Certification {
        title: "AWS Certified Solutions Architect - Associate",
        provider: "Amazon Web Services",
        date: "September 2022",
        url: "https://aws.amazon.com/certification/certified-solutions-architect-associate/",
    },
    Certification {
        title: "HashiCorp Certified: Terraform Associate",
        provider: "HashiCorp",
        date: "May 2022",
        url: "https://www.hashicorp.com/certification/terraform-associate",
    },
    Certification {
        title: "Professional Cloud Architect",
        provider: "Google Cloud",
        date: "March 2021",
        url: "https://cloud.google.com/learn/certification/cloud-architect",
    },
    Certification {
        title: "Linux Foundation Certified System Administrator",
        provider: "The Linux Foundation",
        date: "November 2019",
        url: "https://training.linuxfoundation.org/certification/linux-foundation-certified-sysadmin-lfcs/",
    },
];

/// Short provider tag shown in the card's badge circle.
fn provider_initials(provider: &str) -> String {
    provider.chars().take(2).collect()
}

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <div class="certifications">
            <header class="section__header">
                <h2 class="section__title">"Certifications"</h2>
            </header>
            <div class="certifications__grid">
                {CERTIFICATIONS
                    .iter()
                    .map(|cert| {
                        view! {
                            <a
                                class="card certifications__card"
                                href=cert.url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <span class="certifications__logo" aria-hidden="true">
                                    {provider_initials(cert.provider)}
                                </span>
                                <span class="certifications__text">
                                    <h3 class="certifications__title">{cert.title}</h3>
                                    <span class="certifications__provider">{cert.provider}</span>
                                    <span class="certifications__date">{cert.date}</span>
                                </span>
                                <span class="certifications__external" aria-hidden="true">
                                    <IconExternalLink size=16 />
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
