//! Back-to-top control, shown once the reader has scrolled past a threshold.

use web_sys::Document;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::state::nav::back_to_top_visible;
use crate::util::dom::{listen, optional_by_id, scroll_y, set_class, smooth_scroll_to, window};

pub fn bind(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let Some(button) = optional_by_id(doc, "back-to-top") else {
        return Ok(());
    };

    let threshold = config.back_to_top_threshold;
    let toggled = button.clone();
    let window = window()?;
    listen(&window, "scroll", move |_| {
        set_class(&toggled, "visible", back_to_top_visible(scroll_y(), threshold));
    })?;
    listen(&button, "click", |_| smooth_scroll_to(0.0))
}
