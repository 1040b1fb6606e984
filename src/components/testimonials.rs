//! Customer quotes.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Testimonial {
    quote: &'static str,
    name: &'static str,
    org: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Saastra replaced three separate tools for us. Hostel allocation and mess billing now run on autopilot.",
        name: "Operations Lead",
        org: "TechVille Campus",
    },
    Testimonial {
        quote: "Loved the speed. We shipped our custom event portal in 4 weeks with clean UI and smooth onboarding.",
        name: "Program Director",
        org: "Innovate Fest",
    },
];

/// Two-card quote section.
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section__header">
                <h2 class="section__title">"What our customers say"</h2>
                <p class="section__lead">"Real teams, real results."</p>
            </div>
            <div class="card-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="card">
                                <blockquote class="testimonial__quote">
                                    "“" {t.quote} "”"
                                </blockquote>
                                <figcaption class="testimonial__source">
                                    "— " {t.name} ", " {t.org}
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
