use super::*;
use crate::settings::binding::{ValueKind, dashboard_bindings};

#[test]
fn for_bindings_creates_one_entry_per_element() {
    let form = FormState::for_bindings(&dashboard_bindings());
    assert_eq!(form.get("notifications-email-enabled"), Some(&FieldValue::Checked(false)));
    assert_eq!(form.get("display-theme"), Some(&FieldValue::Text(String::new())));
    assert_eq!(form.get("missing"), None);
}

#[test]
fn set_updates_known_element() {
    let bindings = vec![Binding::new("email", "n", "email", ValueKind::Checkbox)];
    let mut form = FormState::for_bindings(&bindings);
    form.set("email", FieldValue::Checked(true));
    assert!(form.checked("email"));
}

#[test]
fn set_ignores_unknown_element() {
    let mut form = FormState::default();
    form.set("ghost", FieldValue::Text("x".to_owned()));
    assert_eq!(form.get("ghost"), None);
}

#[test]
fn text_reads_empty_for_checkbox_and_unknown() {
    let bindings = vec![
        Binding::new("email", "n", "email", ValueKind::Checkbox),
        Binding::new("scale", "d", "scale", ValueKind::Choice),
    ];
    let mut form = FormState::for_bindings(&bindings);
    form.set("scale", FieldValue::Text("log".to_owned()));
    assert_eq!(form.text("scale"), "log");
    assert_eq!(form.text("email"), "");
    assert_eq!(form.text("ghost"), "");
    assert!(!form.checked("scale"));
}
