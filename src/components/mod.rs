//! Page section and widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module renders one section of the landing page. Sections are static
//! markup except where they read shared state from Leptos context providers
//! (header menu, theme toggle, back-to-top visibility).

pub mod contact;
pub mod development;
pub mod faq;
pub mod features;
pub mod floating;
pub mod footer;
pub mod header;
pub mod hero;
pub mod pricing;
pub mod products;
pub mod testimonials;
pub mod trust_bar;
