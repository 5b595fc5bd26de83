//! Page bootstrap: waits for the DOM, then binds every controller.
//!
//! ERROR HANDLING
//! ==============
//! A controller that fails to bind is logged and skipped; the rest of the page
//! still comes alive. Only a missing window or document aborts startup.

use gloo_timers::callback::Timeout;

use crate::config::PageConfig;
use crate::controllers::{back_to_top, contact_form, menu, navigation, reveal, skill_bars, theme, typed_text};
use crate::error::PageError;
use crate::util::dom::{add_class, document, listen, window};
use crate::util::ready::is_parsing;

/// Run `init` on `DOMContentLoaded`, or right away if parsing is done.
/// Also marks the body `loaded` on the window `load` event.
pub fn start_when_ready() -> Result<(), PageError> {
    let doc = document()?;
    let window = window()?;
    listen(&window, "load", |_| {
        log::debug!("window loaded");
        mark_loaded();
    })?;

    if is_parsing(&doc.ready_state()) {
        listen(&doc, "DOMContentLoaded", |_| init())
    } else {
        init();
        Ok(())
    }
}

fn report<T>(name: &str, result: Result<T, PageError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{name} binding failed: {e}");
            None
        }
    }
}

fn mark_loaded() {
    if let Some(body) = document().ok().and_then(|doc| doc.body()) {
        add_class(&body, "loaded");
    }
}

/// Bind every controller against the current document.
pub fn init() {
    log::info!("initializing portfolio");
    let doc = match document() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("portfolio init skipped: {e}");
            return;
        }
    };
    let config = PageConfig::load();

    let menu = report("mobile menu", menu::bind(&doc)).flatten();
    report("theme", theme::bind(&doc, &config, menu.clone()));
    typed_text::bind(&doc, &config);
    report("reveal", reveal::bind(&doc, &config));
    report("anchor links", navigation::bind_anchor_links(&doc, &config));
    report("skill bars", skill_bars::bind(&doc, &config));
    report("navigation", navigation::bind(&doc, &config, menu));
    report("back to top", back_to_top::bind(&doc, &config));
    report("contact form", contact_form::bind(&doc));
    report("sections", reveal::show_sections(&doc));

    Timeout::new(config.loaded_delay_ms, mark_loaded).forget();
    log::info!("portfolio initialized");
}
