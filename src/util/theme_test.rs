#![cfg(not(feature = "hydrate"))]

use super::*;

const KEY: &str = "portfolio-theme";

#[test]
fn read_preference_is_light_without_storage() {
    assert_eq!(read_preference(KEY), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(KEY, Theme::Light), Theme::Dark);
    assert_eq!(toggle(KEY, Theme::Dark), Theme::Light);
}

#[test]
fn double_toggle_returns_to_start() {
    let start = read_preference(KEY);
    assert_eq!(toggle(KEY, toggle(KEY, start)), start);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
