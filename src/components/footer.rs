//! Page footer: brand blurb, sitemap columns and contact endpoints.

use leptos::prelude::*;

use crate::content;

const PRODUCT_LINKS: &[&str] = &[
    "Hostel Management",
    "Mess Management",
    "Event Suite",
    "Transport / TTC",
    "AI Chat Assistant",
];

const COMPANY_LINKS: &[(&str, &str)] = &[
    ("Development", "#development"),
    ("Portfolio", "#portfolio"),
    ("Blog", "#blog"),
    ("Pricing", "#pricing"),
];

#[cfg(feature = "csr")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(feature = "csr"))]
fn current_year() -> u32 {
    2026
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__columns">
                    <div>
                        <a class="footer__brand" href="#">
                            <span class="footer__logo">"📖"</span>
                            <span>{content::BRAND}</span>
                        </a>
                        <p class="footer__blurb">
                            "Smarter Software, Simplified. Modular SaaS for institutions and modern teams."
                        </p>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Products"</h4>
                        <ul class="footer__list">
                            {PRODUCT_LINKS
                                .iter()
                                .copied()
                                .map(|name| {
                                    view! {
                                        <li>
                                            <a href="#products">{name}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Company"</h4>
                        <ul class="footer__list">
                            {COMPANY_LINKS
                                .iter()
                                .copied()
                                .map(|(label, href)| {
                                    view! {
                                        <li>
                                            <a href=href>{label}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Contact"</h4>
                        <ul class="footer__list">
                            <li>"📧 " {content::CONTACT_EMAIL}</li>
                            <li>"📱 " {content::CONTACT_PHONE}</li>
                            <li>
                                <a
                                    href=content::WHATSAPP_URL
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    "WhatsApp 💬"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer__copyright">
                    {format!("© {} {}. All rights reserved.", current_year(), content::BRAND)}
                </div>
            </div>
        </footer>
    }
}
