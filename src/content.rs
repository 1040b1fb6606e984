//! Shared page content: brand copy, navigation, and contact endpoints.
//!
//! Section-specific catalogs live next to the components that render them;
//! only values referenced from more than one place are collected here.
//! Everything is defined at load and never mutated.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Brand name shown in the header and footer.
pub const BRAND: &str = "Saastra";

/// Brand tagline; doubles as the highlighted half of the hero headline.
pub const TAGLINE: &str = "Smarter Software, Simplified.";

/// Document title.
pub const PAGE_TITLE: &str = "Saastra – Smarter Software, Simplified.";

/// In-page navigation link.
#[derive(Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Header and mobile-panel navigation.
///
/// `#portfolio` and `#blog` have no matching section on the page; clicks on
/// them exercise the missing-target no-op path.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Products", href: "#products" },
    NavLink { label: "Development", href: "#development" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Pricing", href: "#pricing" },
    NavLink { label: "Blog", href: "#blog" },
    NavLink { label: "Contact", href: "#contact" },
];

/// WhatsApp deep link used by the contact section and the floating button.
/// The number is a placeholder.
pub const WHATSAPP_URL: &str = "https://wa.me/919999999999";

/// Sales mailbox.
pub const CONTACT_EMAIL: &str = "hello@saastra.app";

/// Display phone number shown in the footer.
pub const CONTACT_PHONE: &str = "+91-99999-99999";
