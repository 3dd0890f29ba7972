//! Declared associations between form elements and document coordinates.
//!
//! DESIGN
//! ======
//! Bindings are a static table built once at startup instead of being
//! discovered by scanning markup on every apply/collect. The [`ValueKind`]
//! decides how a document value is shown in the element and how the element's
//! value is typed on the way back.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use super::document::SettingValue;

/// How a bound element presents its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Checkbox; the checked state is the value.
    Checkbox,
    /// Free-text input.
    Text,
    /// Select element with fixed options.
    Choice,
    /// Numeric input. The element holds a string, the document a number.
    Number,
}

/// The value an element currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Checked(bool),
    Text(String),
}

/// One element bound to one `(category, setting)` coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub element_id: String,
    pub category: String,
    pub setting: String,
    pub kind: ValueKind,
}

impl Binding {
    pub fn new(element_id: &str, category: &str, setting: &str, kind: ValueKind) -> Self {
        Self {
            element_id: element_id.to_owned(),
            category: category.to_owned(),
            setting: setting.to_owned(),
            kind,
        }
    }

    /// Dotted coordinate this binding points at.
    #[must_use]
    pub fn coordinate(&self) -> String {
        format!("{}.{}", self.category, self.setting)
    }

    /// Element value for a document value, or the kind's fallback when the
    /// coordinate is absent.
    #[must_use]
    pub fn to_field(&self, value: Option<&SettingValue>) -> FieldValue {
        match (self.kind, value) {
            (ValueKind::Checkbox, Some(v)) => FieldValue::Checked(v.truthy()),
            (ValueKind::Checkbox, None) => FieldValue::Checked(false),
            (_, Some(v)) => FieldValue::Text(v.to_string()),
            (_, None) => FieldValue::Text(String::new()),
        }
    }

    /// Document value for an element value. Numbers that do not parse are kept
    /// as the raw string; nothing is validated here.
    #[must_use]
    pub fn from_field(&self, field: FieldValue) -> SettingValue {
        match field {
            FieldValue::Checked(checked) => SettingValue::Bool(checked),
            FieldValue::Text(text) if self.kind == ValueKind::Number => text
                .trim()
                .parse::<serde_json::Number>()
                .map_or(SettingValue::Text(text), SettingValue::Number),
            FieldValue::Text(text) => SettingValue::Text(text),
        }
    }
}

/// Bindings for the dashboard settings form.
pub fn dashboard_bindings() -> Vec<Binding> {
    vec![
        Binding::new("display-theme", "display", "theme", ValueKind::Choice),
        Binding::new("display-default-chart-view", "display", "default_chart_view", ValueKind::Choice),
        Binding::new("display-default-scale", "display", "default_scale", ValueKind::Choice),
        Binding::new("notifications-email-enabled", "notifications", "email_enabled", ValueKind::Checkbox),
        Binding::new("notifications-browser-enabled", "notifications", "browser_enabled", ValueKind::Checkbox),
        Binding::new("notifications-frequency", "notifications", "frequency", ValueKind::Choice),
        Binding::new("data-moving-average", "data", "moving_average", ValueKind::Number),
        Binding::new("data-auto-refresh", "data", "auto_refresh", ValueKind::Number),
    ]
}
