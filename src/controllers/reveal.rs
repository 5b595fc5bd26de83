//! Fade-in reveal for `.fade-in` elements and the initial section pass.

use web_sys::Document;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::util::dom::{add_class, query_all};
use crate::util::observer::{WatchOptions, observe_all, watch_entering};

/// Mark each `.fade-in` element `visible` the first time it scrolls into
/// view. Elements are never hidden again.
pub fn bind(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let targets = query_all(doc, ".fade-in")?;
    if targets.is_empty() {
        return Ok(());
    }

    let options = WatchOptions {
        threshold: config.reveal_threshold,
        root_margin: Some(config.reveal_root_margin.clone()),
    };
    let observer = watch_entering(&options, |el, _| add_class(&el, "visible"))?;
    observe_all(&observer, &targets);
    log::debug!("watching {} fade-in elements", targets.len());
    Ok(())
}

/// Sections are shown immediately; only nested `.fade-in` content waits for
/// the observer.
pub fn show_sections(doc: &Document) -> Result<(), PageError> {
    for section in query_all(doc, "section")? {
        add_class(&section, "visible");
    }
    Ok(())
}
