//! Scroll-position watcher driving back-to-top visibility.
//!
//! A window scroll listener compares the vertical offset against a fixed
//! threshold on every event and publishes the result into `UiState`. The
//! comparison is cheap enough that no debouncing is needed.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "csr")]
use crate::state::ui::UiState;

/// Vertical offset in CSS pixels past which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

/// Whether the back-to-top control should be visible at `offset`.
///
/// Strictly greater than: an offset of exactly 400 keeps it hidden.
pub fn past_threshold(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}

/// Window scroll listener. Dropping the value removes the listener.
#[cfg(feature = "csr")]
pub struct ScrollWatcher {
    window: web_sys::Window,
    handler: Closure<dyn FnMut()>,
}

#[cfg(feature = "csr")]
impl ScrollWatcher {
    /// Register the scroll listener. Returns `None` outside a browser window.
    pub fn install(ui: RwSignal<UiState>) -> Option<Self> {
        let window = web_sys::window()?;

        let handler = Closure::wrap(Box::new(move || {
            if let Some(win) = web_sys::window() {
                if let Ok(offset) = win.scroll_y() {
                    ui.update(|u| u.show_back_to_top = past_threshold(offset));
                }
            }
        }) as Box<dyn FnMut()>);

        let _ = window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());

        // Initial publish, so a restored scroll position is reflected before
        // the first scroll event.
        if let Ok(offset) = window.scroll_y() {
            ui.update(|u| u.show_back_to_top = past_threshold(offset));
        }

        Some(Self { window, handler })
    }
}

#[cfg(feature = "csr")]
impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.handler.as_ref().unchecked_ref());
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
