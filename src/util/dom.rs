//! Thin `web-sys` wrappers used by every controller.
//!
//! Listeners registered here are leaked on purpose with `Closure::forget`:
//! the page never tears its controllers down, so each closure must outlive
//! the Rust scope that created it.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// Look up an optional element, logging when the markup omits it.
pub fn optional_by_id(doc: &Document, id: &str) -> Option<Element> {
    let el = doc.get_element_by_id(id);
    if el.is_none() {
        log::debug!("#{id} not present; skipping");
    }
    el
}

pub fn required_by_id(doc: &Document, id: &str) -> Result<Element, PageError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{id}")))
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Add or remove a single class.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn add_class(el: &Element, class: &str) {
    set_class(el, class, true);
}

/// Vertical offset of an element from its offset parent (the page, for
/// top-level sections).
pub fn offset_top(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map_or(0.0, |html| f64::from(html.offset_top()))
}

/// Set one inline style property on an element.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Current vertical scroll position of the window.
pub fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    let Ok(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Show a blocking message to the visitor.
pub fn alert(message: &str) {
    if let Ok(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Read the current value of an input, textarea or select by id.
pub fn field_value(doc: &Document, id: &str) -> Result<String, PageError> {
    let el = required_by_id(doc, id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Ok(area.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Ok(select.value());
    }
    Err(PageError::WrongElementType { id: id.to_owned(), expected: "form control" })
}

/// Register `handler` for `event` on `target` for the page's lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
