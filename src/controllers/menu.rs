//! Mobile navigation drawer.

use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use crate::error::PageError;
use crate::util::dom::{listen, optional_by_id, set_class};

/// Handle to the overlay menu, shared with controllers that close it.
pub struct MobileMenu {
    menu: Element,
    body: Option<HtmlElement>,
}

impl MobileMenu {
    /// Show the drawer and lock page scroll behind it.
    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        set_class(&self.menu, "active", open);
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", if open { "hidden" } else { "auto" });
        }
    }
}

/// Wire `#menu-toggle` and `#close-menu`. Returns `None` when the page has no
/// `#mobile-menu`.
pub fn bind(doc: &Document) -> Result<Option<Rc<MobileMenu>>, PageError> {
    let Some(menu) = optional_by_id(doc, "mobile-menu") else {
        return Ok(None);
    };
    let menu = Rc::new(MobileMenu { menu, body: doc.body() });

    if let Some(toggle) = optional_by_id(doc, "menu-toggle") {
        let menu = Rc::clone(&menu);
        listen(&toggle, "click", move |_| menu.open())?;
    }
    if let Some(close) = optional_by_id(doc, "close-menu") {
        let menu = Rc::clone(&menu);
        listen(&close, "click", move |_| menu.close())?;
    }

    Ok(Some(menu))
}
