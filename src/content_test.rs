use super::*;

use std::collections::HashSet;

// =============================================================
// Navigation catalog
// =============================================================

#[test]
fn nav_has_six_links() {
    assert_eq!(NAV_LINKS.len(), 6);
}

#[test]
fn nav_links_are_all_in_page_fragments() {
    for link in NAV_LINKS {
        assert!(
            crate::util::navigation::fragment_id(link.href).is_some(),
            "{} should point at an in-page fragment",
            link.label
        );
    }
}

#[test]
fn nav_labels_and_targets_are_unique() {
    let labels: HashSet<_> = NAV_LINKS.iter().map(|l| l.label).collect();
    let hrefs: HashSet<_> = NAV_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(labels.len(), NAV_LINKS.len());
    assert_eq!(hrefs.len(), NAV_LINKS.len());
}

// =============================================================
// Brand copy and contact endpoints
// =============================================================

#[test]
fn page_title_combines_brand_and_tagline() {
    assert!(PAGE_TITLE.starts_with(BRAND));
    assert!(PAGE_TITLE.ends_with(TAGLINE));
}

#[test]
fn contact_endpoints_are_well_formed() {
    assert!(WHATSAPP_URL.starts_with("https://wa.me/"));
    assert!(CONTACT_EMAIL.contains('@'));
    assert!(CONTACT_PHONE.starts_with("+91"));
}
