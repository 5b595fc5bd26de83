//! Theme toggle buttons.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::controllers::menu::MobileMenu;
use crate::error::PageError;
use crate::state::theme::Theme;
use crate::util::dom::{listen, optional_by_id};
use crate::util::theme;

struct ThemeController {
    storage_key: String,
    current: Cell<Theme>,
    icons: Vec<Element>,
}

impl ThemeController {
    fn toggle(&self) {
        let next = theme::toggle(&self.storage_key, self.current.get());
        self.current.set(next);
        self.sync_icons();
        log::debug!("theme switched to {}", next.as_stored());
    }

    fn sync_icons(&self) {
        let class = self.current.get().icon_class();
        for icon in &self.icons {
            icon.set_class_name(class);
        }
    }
}

fn icon_of(button: &Element) -> Option<Element> {
    button.query_selector("i").ok().flatten()
}

/// Apply the stored preference and wire `#theme-toggle` and
/// `#mobile-theme-toggle`. The mobile button also closes the drawer.
pub fn bind(doc: &Document, config: &PageConfig, menu: Option<Rc<MobileMenu>>) -> Result<(), PageError> {
    let desktop = optional_by_id(doc, "theme-toggle");
    let mobile = optional_by_id(doc, "mobile-theme-toggle");

    let initial = theme::read_preference(&config.storage_key);
    theme::apply(initial);

    let controller = Rc::new(ThemeController {
        storage_key: config.storage_key.clone(),
        current: Cell::new(initial),
        icons: desktop.iter().chain(mobile.iter()).filter_map(icon_of).collect(),
    });
    controller.sync_icons();

    if let Some(button) = desktop {
        let controller = Rc::clone(&controller);
        listen(&button, "click", move |_| controller.toggle())?;
    }
    if let Some(button) = mobile {
        let controller = Rc::clone(&controller);
        listen(&button, "click", move |_| {
            controller.toggle();
            if let Some(menu) = &menu {
                menu.close();
            }
        })?;
    }

    Ok(())
}
