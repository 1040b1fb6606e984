//! Custom development pitch with the five delivery phases.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct DevelopmentPhase {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const PHASES: &[DevelopmentPhase] = &[
    DevelopmentPhase {
        icon: "💬",
        title: "Consult",
        description: "Understand goals, users and scope.",
    },
    DevelopmentPhase {
        icon: "📖",
        title: "Design",
        description: "Wireframes, UI kit & architecture.",
    },
    DevelopmentPhase {
        icon: "🧩",
        title: "Build",
        description: "Agile sprints, clean code & tests.",
    },
    DevelopmentPhase {
        icon: "🛡",
        title: "Launch",
        description: "Deploy, secure & monitor.",
    },
    DevelopmentPhase {
        icon: "📊",
        title: "Scale",
        description: "Iterate with analytics & feedback.",
    },
];

/// Custom development section with phase cards.
#[component]
pub fn Development() -> impl IntoView {
    view! {
        <section id="development" class="section">
            <div class="development__inner">
                <div>
                    <h2 class="section__title">"Need a custom SaaS? We’ll build it."</h2>
                    <p class="section__lead">
                        "From MVPs to enterprise platforms. Transparent timelines, fixed milestones, and post-launch support."
                    </p>
                    <div class="section__actions">
                        <a href="#contact" class="btn btn--primary">
                            "Request Free Consultation →"
                        </a>
                    </div>
                </div>
                <div class="development__phases">
                    {PHASES
                        .iter()
                        .map(|phase| {
                            view! {
                                <div class="card">
                                    <div class="card__head">
                                        <span class="card__icon">{phase.icon}</span>
                                        <h3 class="card__title">{phase.title}</h3>
                                    </div>
                                    <p class="card__body">{phase.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
