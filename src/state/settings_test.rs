use super::*;

#[test]
fn settings_default_theme_is_light() {
    assert_eq!(Settings::default().theme, Theme::Light);
}

#[test]
fn settings_compare_by_theme() {
    let a = Settings { theme: Theme::Dark };
    let b = Settings { theme: Theme::Dark };
    assert_eq!(a, b);
    assert_ne!(a, Settings::default());
}
