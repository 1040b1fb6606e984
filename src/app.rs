//! Root application component with context providers and browser wiring.
//!
//! DESIGN
//! ======
//! All shared state lives in two context signals created here: [`Settings`]
//! for the theme and [`UiState`] for transient chrome (mobile menu,
//! back-to-top visibility). Document-level listeners are owned by guard
//! values held in `Rc<RefCell<Option<_>>>` slots; each guard removes its
//! listener on drop, so disposing the root scope tears everything down.

use leptos::prelude::*;
use leptos_meta::{Style, Title, provide_meta_context};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use crate::components::{
    contact::Contact,
    development::Development,
    faq::Faq,
    features::Features,
    floating::{BackToTop, WhatsAppFloat},
    footer::Footer,
    header::Header,
    hero::Hero,
    pricing::Pricing,
    products::Products,
    testimonials::Testimonials,
    trust_bar::TrustBar,
};
use crate::content;
use crate::state::{settings::Settings, ui::UiState};
use crate::styles;
#[cfg(feature = "csr")]
use crate::util::navigation::AnchorInterceptor;
#[cfg(feature = "csr")]
use crate::util::scroll::ScrollWatcher;
#[cfg(feature = "csr")]
use crate::util::theme;

/// Root landing page component.
///
/// Provides the shared state contexts, applies the resolved theme once the
/// page is live in the browser, and installs the document-level click and
/// scroll listeners.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = RwSignal::new(Settings::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(settings);
    provide_context(ui);

    // Resolve the persisted or OS-level preference after mount, mirroring
    // it into both the document root and the settings signal.
    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let resolved = theme::load();
            theme::apply(resolved);
            settings.update(|s| s.theme = resolved);
        });
    }

    #[cfg(feature = "csr")]
    let anchors = Rc::new(RefCell::new(None::<AnchorInterceptor>));
    #[cfg(feature = "csr")]
    {
        let anchors = Rc::clone(&anchors);
        Effect::new(move || {
            if anchors.borrow().is_some() {
                return;
            }
            *anchors.borrow_mut() = AnchorInterceptor::install(ui);
        });
    }

    #[cfg(feature = "csr")]
    let watcher = Rc::new(RefCell::new(None::<ScrollWatcher>));
    #[cfg(feature = "csr")]
    {
        let watcher = Rc::clone(&watcher);
        Effect::new(move || {
            if watcher.borrow().is_some() {
                return;
            }
            *watcher.borrow_mut() = ScrollWatcher::install(ui);
        });
    }

    view! {
        <Style>{styles::PAGE_CSS}</Style>
        <Title text=content::PAGE_TITLE/>

        <Header/>
        <main>
            <Hero/>
            <TrustBar/>
            <Features/>
            <Products/>
            <Development/>
            <Testimonials/>
            <Pricing/>
            <Faq/>
            <Contact/>
        </main>
        <Footer/>
        <BackToTop/>
        <WhatsAppFloat/>
    }
}
