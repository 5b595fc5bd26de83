//! Theme preference persistence and application.
//!
//! Reads the visitor's preference from `localStorage` and reflects it as a
//! `data-theme` attribute on the `<html>` element. Toggling writes the new
//! value back. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: with storage unavailable the page simply
//! starts light every visit. Without `hydrate` every DOM call is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::state::theme::THEME_ATTRIBUTE;
use crate::util::storage;

/// Read the stored preference under `key`. Absent storage means light.
pub fn read_preference(key: &str) -> Theme {
    Theme::from_stored(storage::load(key).as_deref())
}

/// Set or remove the `data-theme` attribute on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = match theme.attribute_value() {
                Some(value) => el.set_attribute(THEME_ATTRIBUTE, value),
                None => el.remove_attribute(THEME_ATTRIBUTE),
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it and persist the new preference under `key`.
pub fn toggle(key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save(key, next.as_stored());
    next
}
