use super::*;
use std::collections::HashSet;

#[test]
fn coordinate_joins_category_and_setting() {
    let binding = Binding::new("email", "notifications", "email", ValueKind::Checkbox);
    assert_eq!(binding.coordinate(), "notifications.email");
}

// =============================================================
// to_field
// =============================================================

#[test]
fn checkbox_shows_boolean_state() {
    let binding = Binding::new("x", "n", "e", ValueKind::Checkbox);
    assert_eq!(binding.to_field(Some(&SettingValue::Bool(true))), FieldValue::Checked(true));
    assert_eq!(binding.to_field(Some(&SettingValue::Bool(false))), FieldValue::Checked(false));
}

#[test]
fn missing_value_uses_kind_fallback() {
    let checkbox = Binding::new("x", "n", "e", ValueKind::Checkbox);
    let text = Binding::new("y", "d", "t", ValueKind::Text);
    assert_eq!(checkbox.to_field(None), FieldValue::Checked(false));
    assert_eq!(text.to_field(None), FieldValue::Text(String::new()));
}

#[test]
fn non_checkbox_shows_string_form() {
    let number = Binding::new("x", "data", "moving_average", ValueKind::Number);
    assert_eq!(number.to_field(Some(&SettingValue::from(20))), FieldValue::Text("20".to_owned()));
    let choice = Binding::new("y", "display", "theme", ValueKind::Choice);
    assert_eq!(choice.to_field(Some(&"dark".into())), FieldValue::Text("dark".to_owned()));
}

// =============================================================
// from_field
// =============================================================

#[test]
fn number_kind_parses_numeric_text() {
    let number = Binding::new("x", "data", "moving_average", ValueKind::Number);
    assert_eq!(number.from_field(FieldValue::Text("7".to_owned())), SettingValue::from(7));
    assert_eq!(number.from_field(FieldValue::Text(" 7 ".to_owned())), SettingValue::from(7));
}

#[test]
fn number_kind_keeps_unparsable_text() {
    let number = Binding::new("x", "data", "moving_average", ValueKind::Number);
    assert_eq!(number.from_field(FieldValue::Text("abc".to_owned())), SettingValue::from("abc"));
    assert_eq!(number.from_field(FieldValue::Text(String::new())), SettingValue::from(""));
}

#[test]
fn choice_kind_keeps_numeric_looking_text_as_string() {
    let choice = Binding::new("x", "display", "default_chart_view", ValueKind::Choice);
    assert_eq!(choice.from_field(FieldValue::Text("1".to_owned())), SettingValue::from("1"));
}

#[test]
fn checked_state_becomes_bool() {
    let checkbox = Binding::new("x", "n", "e", ValueKind::Checkbox);
    assert_eq!(checkbox.from_field(FieldValue::Checked(true)), SettingValue::Bool(true));
}

#[test]
fn field_round_trip_preserves_values() {
    let number = Binding::new("x", "data", "auto_refresh", ValueKind::Number);
    let value = SettingValue::from(30);
    assert_eq!(number.from_field(number.to_field(Some(&value))), value);
}

// =============================================================
// dashboard_bindings
// =============================================================

#[test]
fn dashboard_bindings_have_unique_elements_and_coordinates() {
    let bindings = dashboard_bindings();
    let ids: HashSet<_> = bindings.iter().map(|b| b.element_id.as_str()).collect();
    let coords: HashSet<_> = bindings.iter().map(Binding::coordinate).collect();
    assert_eq!(ids.len(), bindings.len());
    assert_eq!(coords.len(), bindings.len());
}

#[test]
fn dashboard_bindings_include_theme() {
    assert!(
        dashboard_bindings()
            .iter()
            .any(|b| b.coordinate() == "display.theme")
    );
}
