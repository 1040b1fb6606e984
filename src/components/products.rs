//! Product grid: the five standalone modules with their headline features.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct ProductItem {
    icon: &'static str,
    name: &'static str,
    features: [&'static str; 4],
}

const PRODUCTS: &[ProductItem] = &[
    ProductItem {
        icon: "🏢",
        name: "Hostel Management",
        features: [
            "Room & bed allocation",
            "Attendance & entry/exit",
            "Fees, invoices & receipts",
            "Complaints & maintenance",
        ],
    },
    ProductItem {
        icon: "🍽",
        name: "Mess Management",
        features: [
            "Meal planning & coupons",
            "Payments & wallets",
            "Wastage prediction (AI)",
            "Daily reports",
        ],
    },
    ProductItem {
        icon: "📅",
        name: "Event Suite",
        features: [
            "Registration & ticketing",
            "Agenda & speakers",
            "Email/WhatsApp alerts",
            "Check-in QR",
        ],
    },
    ProductItem {
        icon: "🚌",
        name: "Transport / TTC",
        features: [
            "Routes & seat booking",
            "GPS & live location",
            "Driver app (soon)",
            "Parent notifications",
        ],
    },
    ProductItem {
        icon: "🤖",
        name: "AI Chat Assistant",
        features: [
            "FAQ + 24/7 support",
            "WhatsApp & web widget",
            "Knowledge-base ingestion",
            "Multi-language",
        ],
    },
];

/// Product cards with feature bullets and demo/pricing links.
#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id="products" class="section">
            <div class="section__header">
                <h2 class="section__title">"Products you can use today"</h2>
                <p class="section__lead">
                    "Pick a module or bundle the full suite. Free demos available."
                </p>
            </div>
            <div class="card-grid">
                {PRODUCTS
                    .iter()
                    .map(|product| {
                        view! {
                            <div class="card">
                                <div class="card__head">
                                    <span class="card__icon">{product.icon}</span>
                                    <h3 class="card__title">{product.name}</h3>
                                </div>
                                <ul class="card__list">
                                    {product
                                        .features
                                        .iter()
                                        .copied()
                                        .map(|feature| {
                                            view! {
                                                <li class="card__list-item">
                                                    <span class="card__check">"✓"</span>
                                                    <span>{feature}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                <div class="card__actions">
                                    <a href="#contact" class="btn btn--primary">
                                        "Book a Demo →"
                                    </a>
                                    <a href="#pricing" class="btn btn--ghost">
                                        "Pricing"
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
