use super::*;

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn toggled_swaps_modes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggled_twice_restores_original() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// ============================================================================
// Storage round-trip
// ============================================================================

#[test]
fn as_str_matches_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("auto"), None);
    assert_eq!(Theme::parse("solarized"), None);
}

// ============================================================================
// Initial resolution
// ============================================================================

#[test]
fn initial_prefers_stored_value() {
    assert_eq!(Theme::initial(Some("dark"), false), Theme::Dark);
    assert_eq!(Theme::initial(Some("light"), true), Theme::Light);
}

#[test]
fn initial_falls_back_to_system_hint() {
    assert_eq!(Theme::initial(None, true), Theme::Dark);
    assert_eq!(Theme::initial(None, false), Theme::Light);
}

#[test]
fn initial_ignores_corrupt_stored_value() {
    assert_eq!(Theme::initial(Some("blue"), true), Theme::Dark);
    assert_eq!(Theme::initial(Some("blue"), false), Theme::Light);
}

#[test]
fn initial_defaults_to_light() {
    assert_eq!(Theme::initial(None, false), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}
