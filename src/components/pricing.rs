//! Pricing section: three static tiers with one highlighted plan.
//!
//! Every call to action points at the contact section; there is no
//! checkout flow on this page.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct PricingTier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    features: [&'static str; 4],
    cta: &'static str,
    highlighted: bool,
}

const TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "₹0",
        period: "/mo",
        features: [
            "Up to 100 users",
            "1 module",
            "Community support",
            "Email reports",
        ],
        cta: "Get Started",
        highlighted: false,
    },
    PricingTier {
        name: "Growth",
        price: "₹7,999",
        period: "/mo",
        features: [
            "Up to 2,000 users",
            "Any 3 modules",
            "Priority support",
            "Advanced analytics",
        ],
        cta: "Start Free Trial",
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        period: "",
        features: [
            "Unlimited users",
            "Full suite",
            "SSO & SLA",
            "Dedicated success manager",
        ],
        cta: "Contact Sales",
        highlighted: false,
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section class="section" id="pricing">
            <div class="section__header">
                <h2 class="section__title">"Simple, scalable pricing"</h2>
                <p class="section__lead">
                    "Choose a plan that fits your institution. Switch or cancel anytime."
                </p>
            </div>
            <div class="pricing-grid">
                {TIERS
                    .iter()
                    .map(|tier| {
                        view! {
                            <article class=if tier.highlighted {
                                "tier tier--highlighted"
                            } else {
                                "tier"
                            }>
                                {tier
                                    .highlighted
                                    .then(|| {
                                        view! { <span class="tier__ribbon">"Popular"</span> }
                                    })}
                                <h3 class="tier__name">{tier.name}</h3>
                                <div class="tier__price-row">
                                    <span class="tier__price">{tier.price}</span>
                                    <span class="tier__period">{tier.period}</span>
                                </div>
                                <ul class="tier__features">
                                    {tier
                                        .features
                                        .iter()
                                        .copied()
                                        .map(|feature| {
                                            view! { <li>"✓ " {feature}</li> }
                                        })
                                        .collect_view()}
                                </ul>
                                <a
                                    class=if tier.highlighted {
                                        "btn btn--primary"
                                    } else {
                                        "btn btn--ghost"
                                    }
                                    href="#contact"
                                >
                                    {tier.cta}
                                </a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
