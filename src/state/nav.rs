//! Section navigation: fragment resolution, scroll targets and the
//! active-link model for the desktop and mobile link groups.
//!
//! DESIGN
//! ======
//! A `LinkGroup` is the authority for which link in a group carries the
//! `active` class; controllers only mirror `is_active` into the DOM. This keeps
//! the at-most-one-active rule in one place for both click and scroll updates.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Element id named by an in-page link, e.g. `"#projects"` → `"projects"`.
///
/// Returns `None` for a bare `"#"` or an href without a fragment.
pub fn fragment_id(href: &str) -> Option<&str> {
    let (_, id) = href.split_once('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Scroll position that places a section's top just below the fixed header.
pub fn scroll_target(section_top: f64, header_offset: f64) -> f64 {
    section_top - header_offset
}

/// Id of the section the reader is currently in: the last section, in
/// document order, whose top minus `threshold` is at or above `scroll_y`.
pub fn current_section<'a, I>(sections: I, scroll_y: f64, threshold: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - threshold)
        .last()
        .map(|(id, _)| id)
}

/// Whether the back-to-top control should be shown at `scroll_y`.
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// One group of navigation links (desktop bar or mobile drawer).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkGroup {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl LinkGroup {
    pub fn new(hrefs: Vec<String>) -> Self {
        Self { hrefs, active: None }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.hrefs.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Mark the clicked link active, clearing the rest of the group.
    /// Out-of-range indices leave the group unchanged.
    pub fn activate(&mut self, index: usize) {
        if index < self.hrefs.len() {
            self.active = Some(index);
        }
    }

    /// Mark the first link pointing at `section_id` active. When no link
    /// matches (or there is no current section), the group has no active link.
    pub fn activate_section(&mut self, section_id: Option<&str>) {
        self.active = section_id.and_then(|id| {
            self.hrefs
                .iter()
                .position(|href| href.strip_prefix('#') == Some(id))
        });
    }
}

/// Active-link state for both navigation groups.
#[derive(Clone, Debug, Default)]
pub struct NavState {
    pub desktop: LinkGroup,
    pub mobile: LinkGroup,
}

impl NavState {
    pub fn new(desktop: Vec<String>, mobile: Vec<String>) -> Self {
        Self { desktop: LinkGroup::new(desktop), mobile: LinkGroup::new(mobile) }
    }

    /// Scroll-driven update applied to both groups.
    pub fn sync_to_section(&mut self, section_id: Option<&str>) {
        self.desktop.activate_section(section_id);
        self.mobile.activate_section(section_id);
    }
}
