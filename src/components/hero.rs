//! Hero section: headline, calls to action, and the suite mock grid.

use leptos::prelude::*;

use crate::content::{BRAND, TAGLINE};

#[derive(Clone, Copy)]
struct HeroTile {
    icon: &'static str,
    label: &'static str,
}

const HERO_TILES: &[HeroTile] = &[
    HeroTile { icon: "🏢", label: "Hostel" },
    HeroTile { icon: "🍽", label: "Mess" },
    HeroTile { icon: "📅", label: "Events" },
    HeroTile { icon: "🚌", label: "Transport" },
    HeroTile { icon: "🤖", label: "AI Chat" },
    HeroTile { icon: "📊", label: "Analytics" },
];

/// Above-the-fold hero with CTAs and a mock suite preview.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <div>
                    <div class="hero__badge">"✨ New: Unified SaaS suite for institutions"</div>
                    <h1 class="hero__title">
                        {BRAND}
                        " – "
                        <span class="hero__title-accent">{TAGLINE}</span>
                    </h1>
                    <p class="hero__lead">
                        "All-in-one platform for hostel & mess management, events, transport, and AI chat. Buy our products or hire us to build your custom SaaS – the choice is yours."
                    </p>
                    <div class="hero__actions">
                        <a href="#products" class="btn btn--primary">
                            "Explore Products →"
                        </a>
                        <a href="#development" class="btn btn--ghost">
                            "Request Development"
                        </a>
                    </div>
                    <div class="hero__chips">
                        <div class="hero__chip">"🛡 SOC2-ready practices"</div>
                        <div class="hero__chip">"💳 Razorpay/Stripe billing"</div>
                    </div>
                </div>

                <div class="hero__mock">
                    <div class="hero__mock-grid">
                        {HERO_TILES
                            .iter()
                            .map(|tile| {
                                view! {
                                    <div class="hero__tile">
                                        <span class="hero__tile-icon">{tile.icon}</span>
                                        <span class="hero__tile-label">{tile.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
