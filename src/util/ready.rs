//! Document parse-state check used to decide when the page controller runs.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

/// Whether `document.readyState` still reports parsing in progress, in which
/// case initialization must wait for `DOMContentLoaded`.
pub fn is_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}
