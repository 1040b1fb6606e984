//! Contact section: direct channels plus a static inquiry form.
//!
//! The form has no submit handler on purpose. Leads arrive over
//! WhatsApp or email until a backend exists to receive them.

use leptos::prelude::*;

use crate::content;

const INTERESTS: &[&str] = &[
    "Hostel Management",
    "Mess Management",
    "Event Suite",
    "Transport / TTC",
    "AI Chat Assistant",
    "Custom SaaS Development",
];

#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{}", content::CONTACT_EMAIL);

    view! {
        <section class="section contact" id="contact">
            <div class="contact__panel">
                <div>
                    <h2 class="section__title">"Let’s build something great"</h2>
                    <p class="section__lead">
                        "Tell us about your institution or project. We’ll reply within one business day."
                    </p>
                    <div class="contact__actions">
                        <a
                            class="btn btn--whatsapp"
                            href=content::WHATSAPP_URL
                            target="_blank"
                            rel="noreferrer"
                        >
                            "WhatsApp Us 💬"
                        </a>
                        <a class="btn btn--ghost" href=mailto>
                            "Email Sales"
                        </a>
                    </div>
                </div>
                <form class="contact__form">
                    <div class="contact__field">
                        <label class="contact__label">"Full Name"</label>
                        <input class="contact__input" placeholder="Your name"/>
                    </div>
                    <div class="contact__field">
                        <label class="contact__label">"Work Email"</label>
                        <input class="contact__input" type="email" placeholder="you@company.com"/>
                    </div>
                    <div class="contact__field">
                        <label class="contact__label">"What are you interested in?"</label>
                        <select class="contact__input">
                            {INTERESTS
                                .iter()
                                .copied()
                                .map(|interest| view! { <option>{interest}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="contact__field">
                        <label class="contact__label">"Message"</label>
                        <textarea
                            class="contact__input contact__input--textarea"
                            rows="4"
                            placeholder="Tell us about your needs"
                        ></textarea>
                    </div>
                    <button class="btn btn--primary" type="submit">
                        "Send Request"
                    </button>
                </form>
            </div>
        </section>
    }
}
