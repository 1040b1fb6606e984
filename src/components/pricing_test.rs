use super::*;

#[test]
fn three_tiers_are_offered() {
    assert_eq!(TIERS.len(), 3);
}

#[test]
fn exactly_one_tier_is_highlighted() {
    let highlighted = TIERS.iter().filter(|t| t.highlighted).count();
    assert_eq!(highlighted, 1);
}

#[test]
fn highlighted_tier_is_growth() {
    let tier = TIERS
        .iter()
        .find(|t| t.highlighted)
        .unwrap();
    assert_eq!(tier.name, "Growth");
}

#[test]
fn tier_names_are_unique() {
    let mut names: Vec<&str> = TIERS.iter().map(|t| t.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TIERS.len());
}

#[test]
fn custom_priced_tier_has_no_period() {
    let enterprise = TIERS
        .iter()
        .find(|t| t.price == "Custom")
        .unwrap();
    assert!(enterprise.period.is_empty());
}

#[test]
fn monthly_tiers_share_a_period_label() {
    for tier in TIERS.iter().filter(|t| t.price != "Custom") {
        assert_eq!(tier.period, "/mo");
    }
}
