#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// Resolution priority
// =============================================================

#[test]
fn resolve_uses_os_signal_when_nothing_persisted() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn resolve_prefers_persisted_over_os_signal() {
    assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
    assert_eq!(resolve(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn load_defaults_to_light_in_non_browser_tests() {
    assert_eq!(load(), Theme::Light);
}

// =============================================================
// Persisted literals
// =============================================================

#[test]
fn as_str_produces_storage_literals() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn parse_round_trips_both_literals() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("DARK"), None);
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse("auto"), None);
}

#[test]
fn storage_key_is_stable() {
    assert_eq!(STORAGE_KEY, "saastra-theme");
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn invert_flips_theme() {
    assert_eq!(Theme::Light.invert(), Theme::Dark);
    assert_eq!(Theme::Dark.invert(), Theme::Light);
}

#[test]
fn double_invert_restores_original() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.invert().invert(), theme);
    }
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
