//! Browser helpers shared by the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from controller logic. `storage` and
//! `theme` compile to no-ops without the `hydrate` feature so they stay
//! callable from native tests; `dom` and `observer` exist only in the browser.

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod observer;
pub mod ready;
pub mod storage;
pub mod theme;
