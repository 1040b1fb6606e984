//! In-page anchor navigation.
//!
//! One delegated click listener on the document intercepts clicks on
//! same-document fragment links, suppresses the browser's default hash jump,
//! smooth-scrolls the target section into view, and closes the mobile menu.
//! Links whose fragment matches no element are a silent no-op.
//!
//! DESIGN
//! ======
//! The listener is owned by [`AnchorInterceptor`], whose `Drop` removes it.
//! Holding the guard for the page component's lifetime gives a strict
//! setup/teardown pairing, so a re-mount never stacks duplicate handlers.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "csr")]
use crate::state::ui::UiState;

/// Extract the fragment identifier from an in-page anchor href.
///
/// Returns `None` for external URLs, bare `#`, and empty strings; those
/// clicks keep default browser behavior.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Delegated click listener registered on the document.
#[cfg(feature = "csr")]
pub struct AnchorInterceptor {
    document: web_sys::Document,
    handler: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

#[cfg(feature = "csr")]
impl AnchorInterceptor {
    /// Register the click listener. Returns `None` outside a browser document.
    pub fn install(ui: RwSignal<UiState>) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let handler = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            handle_click(&ev, ui);
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        let _ = document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        Some(Self { document, handler })
    }
}

#[cfg(feature = "csr")]
impl Drop for AnchorInterceptor {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.handler.as_ref().unchecked_ref());
    }
}

#[cfg(feature = "csr")]
fn handle_click(ev: &web_sys::MouseEvent, ui: RwSignal<UiState>) {
    let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return;
    };
    if element.tag_name() != "A" {
        return;
    }
    let Some(href) = element.get_attribute("href") else {
        return;
    };
    let Some(id) = fragment_id(&href) else {
        return;
    };

    // Suppress the default hash jump even when the target is missing, so a
    // dangling link changes nothing at all.
    ev.prevent_default();
    ui.update(|u| u.menu_open = false);

    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id));
    if let Some(section) = target {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
