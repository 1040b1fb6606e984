//! One-line trust strip under the hero.

use leptos::prelude::*;

/// Single-line reassurance banner.
#[component]
pub fn TrustBar() -> impl IntoView {
    view! {
        <section class="trust-bar">
            <p class="trust-bar__line">
                "Built with security-first practices • 99.9% uptime target • Privacy by design"
            </p>
        </section>
    }
}
