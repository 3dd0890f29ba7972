//! UI components for the dashboard pages.

pub mod nav_bar;
pub mod settings_form;
pub mod theme_toggle;
pub mod toast_host;
