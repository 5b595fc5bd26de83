//! `IntersectionObserver` construction.
//!
//! Callbacks receive the intersecting target together with the observer so a
//! handler can stop watching an element once it has done its work.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::PageError;

/// Watch options: visible fraction required and the root margin.
#[derive(Clone, Debug)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

/// Build an observer that calls `on_enter` for every entry that is
/// intersecting. Entries leaving the viewport are ignored.
pub fn watch_entering<F>(options: &WatchOptions, mut on_enter: F) -> Result<IntersectionObserver, PageError>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(entry.target(), &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin.as_deref() {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    Ok(observer)
}

/// Observe every element in `targets`.
pub fn observe_all(observer: &IntersectionObserver, targets: &[Element]) {
    for target in targets {
        observer.observe(target);
    }
}
