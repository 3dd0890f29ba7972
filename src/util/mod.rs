//! Browser-facing helpers used by components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page` and `theme` hold the only direct `web-sys` calls outside
//! `settings::browser`; `nav` is pure and shared by the navbar.

pub mod nav;
pub mod page;
pub mod theme;
