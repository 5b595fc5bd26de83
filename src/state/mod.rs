//! Page-session state models.
//!
//! DESIGN
//! ======
//! Each model is a plain value with no browser dependency so the behavior of
//! every controller can be exercised natively. Controllers own one instance
//! per page and mirror it into DOM classes and attributes.

pub mod contact;
pub mod nav;
pub mod skill_bar;
pub mod theme;
pub mod typed_text;
