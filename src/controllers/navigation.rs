//! Smooth-scroll navigation and scroll-driven active link tracking.
//!
//! Desktop (`.nav-link`) and mobile (`.mobile-nav-link`) links form separate
//! groups: a click activates a link within its own group only, while the
//! scroll listener re-derives the active link in both from the current
//! section.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::controllers::menu::MobileMenu;
use crate::error::PageError;
use crate::state::nav::{LinkGroup, NavState, current_section, fragment_id, scroll_target};
use crate::util::dom::{listen, offset_top, query_all, scroll_y, set_class, smooth_scroll_to, window};

const DESKTOP_LINKS: &str = ".nav-link";
const MOBILE_LINKS: &str = ".mobile-nav-link";

fn href_of(el: &Element) -> String {
    el.get_attribute("href").unwrap_or_default()
}

/// Scroll so the element named by `href`'s fragment sits below the header.
/// Returns `false` when the href has no fragment or the target is missing.
pub fn scroll_to_fragment(doc: &Document, href: &str, header_offset: f64) -> bool {
    let Some(target) = fragment_id(href).and_then(|id| doc.get_element_by_id(id)) else {
        return false;
    };
    smooth_scroll_to(scroll_target(offset_top(&target), header_offset));
    true
}

struct NavLinks {
    desktop: Vec<Element>,
    mobile: Vec<Element>,
}

impl NavLinks {
    fn sync(&self, state: &NavState) {
        sync_group(&self.desktop, &state.desktop);
        sync_group(&self.mobile, &state.mobile);
    }
}

fn sync_group(links: &[Element], group: &LinkGroup) {
    for (i, link) in links.iter().enumerate() {
        set_class(link, "active", group.is_active(i));
    }
}

#[derive(Clone, Copy)]
enum Group {
    Desktop,
    Mobile,
}

/// Wire nav link clicks and the scroll listener that tracks the current
/// section. Mobile link clicks also close the drawer.
pub fn bind(doc: &Document, config: &PageConfig, menu: Option<Rc<MobileMenu>>) -> Result<(), PageError> {
    let desktop = query_all(doc, DESKTOP_LINKS)?;
    let mobile = query_all(doc, MOBILE_LINKS)?;
    let state = Rc::new(RefCell::new(NavState::new(
        desktop.iter().map(href_of).collect(),
        mobile.iter().map(href_of).collect(),
    )));
    let links = Rc::new(NavLinks { desktop, mobile });
    let header_offset = config.header_offset;

    for (group, elements) in [(Group::Desktop, &links.desktop), (Group::Mobile, &links.mobile)] {
        for (index, link) in elements.iter().enumerate() {
            let doc = doc.clone();
            let href = href_of(link);
            let state = Rc::clone(&state);
            let links_cb = Rc::clone(&links);
            let menu = menu.clone();
            listen(link, "click", move |ev| {
                ev.prevent_default();
                scroll_to_fragment(&doc, &href, header_offset);
                let mut state = state.borrow_mut();
                match group {
                    Group::Desktop => state.desktop.activate(index),
                    Group::Mobile => {
                        state.mobile.activate(index);
                        if let Some(menu) = &menu {
                            menu.close();
                        }
                    }
                }
                links_cb.sync(&state);
            })?;
        }
    }

    let sections: Vec<(String, Element)> = query_all(doc, "section[id]")?
        .into_iter()
        .map(|s| (s.id(), s))
        .collect();
    let threshold = config.active_section_threshold;
    let update = move || {
        let tops = sections.iter().map(|(id, s)| (id.as_str(), offset_top(s)));
        let current = current_section(tops, scroll_y(), threshold);
        let mut state = state.borrow_mut();
        state.sync_to_section(current);
        links.sync(&state);
    };
    update();
    let window = window()?;
    listen(&window, "scroll", move |_| update())?;

    log::debug!("navigation bound");
    Ok(())
}

/// Smooth-scroll every other in-page anchor. A bare `#` is left alone.
pub fn bind_anchor_links(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let selector = format!(r##"a[href^="#"]:not({DESKTOP_LINKS}):not({MOBILE_LINKS})"##);
    let header_offset = config.header_offset;
    for anchor in query_all(doc, &selector)? {
        let doc = doc.clone();
        let href = href_of(&anchor);
        listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            if !scroll_to_fragment(&doc, &href, header_offset) {
                log::debug!("no scroll target for {href}");
            }
        })?;
    }
    Ok(())
}
