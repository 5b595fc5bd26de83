//! Animates `.skill-progress` bars to their `data-width` once visible.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Node};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::state::skill_bar::{SkillBarLatch, WIDTH_ATTRIBUTE, parse_target_width, width_style};
use crate::util::dom::{query_all, set_style};
use crate::util::observer::{WatchOptions, observe_all, watch_entering};

pub fn bind(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let bars = Rc::new(query_all(doc, ".skill-progress")?);
    if bars.is_empty() {
        return Ok(());
    }

    let latch = RefCell::new(SkillBarLatch::new(bars.len()));
    let delay_ms = config.skill_delay_ms;
    let options = WatchOptions { threshold: config.skill_threshold, root_margin: None };
    let known = Rc::clone(&bars);

    let observer = watch_entering(&options, move |el, observer| {
        let node: &Node = &el;
        let Some(index) = known.iter().position(|bar| bar.is_same_node(Some(node))) else {
            return;
        };
        observer.unobserve(&el);
        if !latch.borrow_mut().fire(index) {
            return;
        }
        let Some(percent) = parse_target_width(el.get_attribute(WIDTH_ATTRIBUTE).as_deref()) else {
            log::debug!("skill bar {index} has no usable {WIDTH_ATTRIBUTE}");
            return;
        };
        Timeout::new(delay_ms, move || set_style(&el, "width", &width_style(percent))).forget();
    })?;

    observe_all(&observer, &bars);
    Ok(())
}
