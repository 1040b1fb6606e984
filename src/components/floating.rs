//! Floating overlay controls pinned to the viewport corners.

use leptos::prelude::*;

use crate::content;
use crate::state::ui::UiState;
use crate::util::scroll;

/// Corner button that scrolls back to the top of the page.
///
/// Visibility follows [`UiState::show_back_to_top`], which the scroll
/// watcher keeps in sync with the window offset.
#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().show_back_to_top>
            <button
                class="back-to-top"
                aria-label="Back to top"
                on:click=move |_| scroll::scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}

/// Always-visible WhatsApp shortcut in the opposite corner.
#[component]
pub fn WhatsAppFloat() -> impl IntoView {
    view! {
        <a
            class="whatsapp-float"
            href=content::WHATSAPP_URL
            target="_blank"
            rel="noreferrer"
            aria-label="Chat on WhatsApp"
            title="Chat on WhatsApp"
        >
            "💬"
        </a>
    }
}
