#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn read_preference_is_light_off_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_the_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
