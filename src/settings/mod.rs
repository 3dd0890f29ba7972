//! Settings synchronization: document model, bindings and the synchronizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `document` and `binding` are plain data, `surface` is the seam to the page,
//! `synchronizer` drives both against `net::settings_api`, and `browser` wires
//! the real page and HTTP client together.

pub mod binding;
pub mod browser;
pub mod config;
pub mod document;
pub mod surface;
pub mod synchronizer;
