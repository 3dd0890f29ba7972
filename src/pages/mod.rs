//! Routed pages.

pub mod dashboard;
pub mod settings;
