//! Presentation surface the synchronizer drives.
//!
//! SYSTEM CONTEXT
//! ==============
//! The synchronizer never touches the DOM itself. Everything it shows or
//! reads goes through [`Surface`], so the browser implementation
//! (`settings::browser`) and test doubles are interchangeable.

use super::binding::{Binding, FieldValue};

/// Severity of a user-visible notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS modifier used by the toast element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Form elements, page chrome and notification sink.
pub trait Surface {
    /// Replace the page-level theme class (e.g. `dark-theme`).
    fn set_theme_class(&self, class: &str);

    /// Show `value` in the element named by `binding`.
    fn write_field(&self, binding: &Binding, value: FieldValue);

    /// Current value of the element, or `None` if the element is not present.
    fn read_field(&self, binding: &Binding) -> Option<FieldValue>;

    /// Redraw charts after settings change. Surfaces without charts ignore it.
    fn refresh_chart(&self) {}

    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;

    /// Show a transient notification.
    fn notify(&self, message: &str, severity: Severity);
}
