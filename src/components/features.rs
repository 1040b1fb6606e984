//! Feature grid: the six modules of the suite at a glance.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct FeatureItem {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        icon: "🏢",
        title: "Hostel Management",
        description: "Room allocation, attendance, billing, complaints.",
    },
    FeatureItem {
        icon: "🍽",
        title: "Mess Management",
        description: "Meal plans, couponing, payments, wastage analytics.",
    },
    FeatureItem {
        icon: "📅",
        title: "Event Suite",
        description: "Registration, ticketing, scheduling, announcements.",
    },
    FeatureItem {
        icon: "🚌",
        title: "Transport / TTC",
        description: "Routes, seat booking, GPS & route optimization.",
    },
    FeatureItem {
        icon: "🤖",
        title: "AI Chat",
        description: "24/7 support, FAQs, multilingual, WhatsApp integration.",
    },
    FeatureItem {
        icon: "📊",
        title: "Analytics",
        description: "Dashboards, reports, and insights for admins.",
    },
];

/// Six-card feature overview.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="section__header">
                <h2 class="section__title">"Everything institutions need"</h2>
                <p class="section__lead">
                    "Modular tools that work brilliantly alone and even better together."
                </p>
            </div>
            <div class="card-grid">
                {FEATURES
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="card">
                                <div class="card__head">
                                    <span class="card__icon">{item.icon}</span>
                                    <h3 class="card__title">{item.title}</h3>
                                </div>
                                <p class="card__body">{item.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
