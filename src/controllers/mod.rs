//! DOM event bindings for the page.
//!
//! ARCHITECTURE
//! ============
//! `page` runs once the document is parsed and calls each controller's
//! `bind`. Controllers are independent: each looks up its own elements, owns
//! its own state model from `crate::state`, and registers listeners that live
//! for the rest of the page session. The mobile menu handle is the only thing
//! passed between them.

pub mod back_to_top;
pub mod contact_form;
pub mod menu;
pub mod navigation;
pub mod page;
pub mod reveal;
pub mod skill_bars;
pub mod theme;
pub mod typed_text;
