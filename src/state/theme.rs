//! Light/dark theme value and its DOM/storage representations.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Attribute set on `<html>` while the dark theme is active.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Page color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a persisted preference. Only the exact marker `"dark"`
    /// selects the dark theme; anything else, including no value, is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value written back to storage.
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// `data-theme` value, or `None` when the attribute should be removed.
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }

    /// Icon class for the toggle buttons. The icon shows the theme a click
    /// switches to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}
