//! Drives the typewriter headline in `#typed-text`.

use std::time::Duration;

use gloo_timers::future::sleep;
use web_sys::Document;

use crate::config::PageConfig;
use crate::state::typed_text::{TypedText, TypingTiming};
use crate::util::dom::optional_by_id;

/// Start the animation loop. It never stops; the page owns it for its
/// whole lifetime.
pub fn bind(doc: &Document, config: &PageConfig) {
    let Some(el) = optional_by_id(doc, "typed-text") else {
        return;
    };
    let Some(mut typed) = TypedText::new(config.typed_strings.clone(), TypingTiming::from_config(config)) else {
        log::debug!("no typed strings configured");
        return;
    };

    let mut delay_ms = config.typing_start_delay_ms;
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            sleep(Duration::from_millis(u64::from(delay_ms))).await;
            let step = typed.tick();
            el.set_text_content(Some(&step.text));
            delay_ms = step.next_delay_ms;
        }
    });
}
