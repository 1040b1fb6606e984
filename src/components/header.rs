//! Sticky page header: brand, section navigation, theme toggle, mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the main consumer of `UiState::menu_open` and the only
//! component that triggers theme toggles. Anchor clicks inside it are handled
//! by the document-level interceptor, which also closes the mobile panel.

use leptos::prelude::*;

use crate::content::{BRAND, NAV_LINKS};
use crate::state::settings::Settings;
use crate::state::ui::UiState;
use crate::util::theme::{self, Theme};

/// Sticky header with desktop nav and a collapsible mobile panel.
#[component]
pub fn Header() -> impl IntoView {
    let settings = expect_context::<RwSignal<Settings>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let theme_glyph = move || {
        if settings.get().theme == Theme::Dark {
            "☀"
        } else {
            "☾"
        }
    };
    let on_toggle_theme = move |_| theme::toggle(settings);

    view! {
        <header class="header">
            <div class="header__inner">
                <a href="#" class="header__brand">
                    <span class="header__logo">"📖"</span>
                    <span>{BRAND}</span>
                </a>

                <nav class="header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="header__nav-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="#contact" class="btn btn--primary">
                        "Get Started"
                    </a>
                    <button class="header__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                        {theme_glyph}
                    </button>
                </nav>

                <div class="header__mobile-controls">
                    <button class="header__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                        {theme_glyph}
                    </button>
                    <button
                        class="header__menu-toggle"
                        on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
                        title="Toggle menu"
                    >
                        {move || if ui.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || ui.get().menu_open>
                <div class="header__mobile-panel">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="header__nav-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="#contact" class="btn btn--primary">
                        "Get Started"
                    </a>
                </div>
            </Show>
        </header>
    }
}
