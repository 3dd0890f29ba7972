//! Networking for the settings HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `settings_api` performs the requests, `types` defines the response and
//! error shapes shared with the synchronizer.

pub mod settings_api;
pub mod types;
