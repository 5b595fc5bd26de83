use super::*;

#[test]
fn stored_dark_marker_selects_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn missing_or_unknown_value_is_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn double_toggle_restores_attribute_and_stored_value() {
    for start in [Theme::Light, Theme::Dark] {
        let back = start.toggled().toggled();
        assert_eq!(back, start);
        assert_eq!(back.attribute_value(), start.attribute_value());
        assert_eq!(back.as_stored(), start.as_stored());
    }
}

#[test]
fn stored_value_round_trips_through_preference() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_stored())), theme);
    }
}

#[test]
fn dark_theme_sets_attribute_and_sun_icon() {
    let theme = Theme::from_stored(Some("dark"));
    assert_eq!(theme.attribute_value(), Some("dark"));
    assert_eq!(theme.icon_class(), "fas fa-sun");
}

#[test]
fn light_theme_removes_attribute_and_shows_moon() {
    assert_eq!(Theme::Light.attribute_value(), None);
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
}
