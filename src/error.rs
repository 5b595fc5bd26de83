//! Error types for DOM binding.
//!
//! ERROR HANDLING
//! ==============
//! Binders return `PageError` so the page controller can log a failed binding
//! and keep wiring the remaining controllers. Nothing here is user-facing; the
//! contact form's validation error lives in `state::contact`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while locating or wiring page elements.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("required element missing: {0}")]
    MissingElement(String),
    #[error("element {id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
