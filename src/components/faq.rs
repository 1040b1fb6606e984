//! FAQ section rendered as native disclosure widgets.
//!
//! `<details>`/`<summary>` gives open/close behavior for free, so this
//! section carries no state of its own.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Can we buy a single module?",
        answer: "Yes. All modules are available standalone and can be bundled later without migration.",
    },
    FaqEntry {
        question: "Do you support WhatsApp?",
        answer: "Our AI Chat Assistant works on web and can integrate with WhatsApp using official APIs.",
    },
    FaqEntry {
        question: "Which payment gateways are supported?",
        answer: "Stripe and Razorpay at launch; others on request.",
    },
    FaqEntry {
        question: "Is data portable?",
        answer: "Yes. We provide secure export, backups and audit logs.",
    },
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section class="section section--narrow">
            <div class="section__header">
                <h2 class="section__title">"Frequently asked questions"</h2>
            </div>
            <div class="faq__list">
                {FAQS
                    .iter()
                    .map(|entry| {
                        view! {
                            <details class="faq__entry">
                                <summary class="faq__question">
                                    <span>{entry.question}</span>
                                    <span class="faq__chevron">"↑"</span>
                                </summary>
                                <p class="faq__answer">{entry.answer}</p>
                            </details>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
