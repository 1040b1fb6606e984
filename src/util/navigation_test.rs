#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// Fragment parsing
// =============================================================

#[test]
fn fragment_id_accepts_section_anchors() {
    assert_eq!(fragment_id("#pricing"), Some("pricing"));
    assert_eq!(fragment_id("#products"), Some("products"));
    assert_eq!(fragment_id("#doesnotexist"), Some("doesnotexist"));
}

#[test]
fn fragment_id_rejects_bare_hash() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn fragment_id_rejects_empty_href() {
    assert_eq!(fragment_id(""), None);
}

#[test]
fn fragment_id_rejects_external_urls() {
    assert_eq!(fragment_id("https://wa.me/919999999999"), None);
    assert_eq!(fragment_id("mailto:hello@saastra.app"), None);
    assert_eq!(fragment_id("/about"), None);
}

#[test]
fn fragment_id_keeps_identifier_verbatim() {
    // Fragment identifiers are not normalized; lookup is exact.
    assert_eq!(fragment_id("#Pricing"), Some("Pricing"));
    assert_eq!(fragment_id("#a-b_c"), Some("a-b_c"));
}

#[test]
fn fragment_id_covers_every_nav_link() {
    for link in crate::content::NAV_LINKS {
        assert!(
            fragment_id(link.href).is_some(),
            "nav link {} should be an in-page fragment",
            link.label
        );
    }
}
