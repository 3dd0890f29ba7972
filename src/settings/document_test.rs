use super::*;
use serde_json::json;

fn server_default() -> serde_json::Value {
    json!({
        "display": { "default_chart_view": "1m", "default_scale": "linear", "theme": "dark" },
        "notifications": { "email_enabled": true, "browser_enabled": true, "frequency": "realtime" },
        "data": { "moving_average": 0, "auto_refresh": 0 },
        "last_updated": "2024-01-01T00:00:00"
    })
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decodes_categories_and_typed_values() {
    let doc: SettingsDocument = serde_json::from_value(server_default()).unwrap();
    assert_eq!(doc.get("display", "theme"), Some(&SettingValue::Text("dark".to_owned())));
    assert_eq!(doc.get("notifications", "email_enabled"), Some(&SettingValue::Bool(true)));
    assert_eq!(doc.get("data", "moving_average"), Some(&SettingValue::from(0)));
    assert_eq!(doc.theme(), Some("dark"));
}

#[test]
fn non_category_entries_become_metadata() {
    let doc: SettingsDocument = serde_json::from_value(server_default()).unwrap();
    assert!(doc.category("last_updated").is_none());
    assert_eq!(doc.metadata("last_updated"), Some(&json!("2024-01-01T00:00:00")));
}

#[test]
fn nested_objects_stay_inside_their_category() {
    let doc = SettingsDocument::from_json(r#"{"chart":{"colors":{"up":"green"},"style":"candle"}}"#).unwrap();
    let chart = doc.category("chart").unwrap();
    assert_eq!(chart.get("style"), Some(&SettingValue::from("candle")));
    assert_eq!(chart.get("colors"), None);
    assert_eq!(chart.passthrough("colors"), Some(&json!({ "up": "green" })));
    assert!(doc.metadata("chart").is_none());
}

#[test]
fn null_value_keeps_rest_of_category_readable() {
    let doc = SettingsDocument::from_json(r#"{"display":{"theme":"dark","accent":null}}"#).unwrap();
    assert_eq!(doc.theme(), Some("dark"));
    assert_eq!(doc.get("display", "accent"), None);
    assert_eq!(doc.category("display").unwrap().passthrough("accent"), Some(&json!(null)));
}

#[test]
fn non_object_body_is_a_decode_error() {
    assert!(matches!(SettingsDocument::from_json("null"), Err(SettingsError::Decode(_))));
    assert!(matches!(SettingsDocument::from_json("<html>"), Err(SettingsError::Decode(_))));
}

#[test]
fn empty_object_decodes_to_empty_document() {
    let doc = SettingsDocument::from_json("{}").unwrap();
    assert_eq!(doc, SettingsDocument::default());
    assert_eq!(doc.theme(), None);
}

// =============================================================
// Encoding
// =============================================================

#[test]
fn encode_writes_back_what_was_read() {
    let original = server_default();
    let doc: SettingsDocument = serde_json::from_value(original.clone()).unwrap();
    let encoded: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(encoded, original);
}

#[test]
fn encode_keeps_non_scalar_entries_next_to_edited_settings() {
    let mut doc = SettingsDocument::from_json(r#"{"display":{"theme":"dark","accent":null,"layout":[1,2]}}"#).unwrap();
    doc.set("display", "theme", "light".into());
    let encoded: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(encoded, json!({ "display": { "theme": "light", "accent": null, "layout": [1, 2] } }));
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn set_creates_missing_category() {
    let mut doc = SettingsDocument::default();
    doc.set("display", "theme", "light".into());
    assert_eq!(doc.theme(), Some("light"));
    assert_eq!(doc.categories().count(), 1);
}

#[test]
fn set_overwrites_existing_value() {
    let mut doc: SettingsDocument = serde_json::from_value(server_default()).unwrap();
    doc.set("notifications", "email_enabled", false.into());
    assert_eq!(doc.get("notifications", "email_enabled"), Some(&SettingValue::Bool(false)));
}

#[test]
fn set_replaces_non_scalar_entry_of_same_name() {
    let mut doc = SettingsDocument::from_json(r#"{"display":{"accent":null}}"#).unwrap();
    doc.set("display", "accent", "blue".into());
    let display = doc.category("display").unwrap();
    assert_eq!(display.get("accent"), Some(&SettingValue::from("blue")));
    assert_eq!(display.passthrough("accent"), None);
}

#[test]
fn new_category_takes_over_metadata_key() {
    let mut doc = SettingsDocument::from_json(r#"{"chart":"none"}"#).unwrap();
    doc.set("chart", "style", "line".into());
    assert!(doc.metadata("chart").is_none());
    let encoded: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(encoded, json!({ "chart": { "style": "line" } }));
}

#[test]
fn theme_ignores_non_string_value() {
    let mut doc = SettingsDocument::default();
    doc.set("display", "theme", true.into());
    assert_eq!(doc.theme(), None);
}

// =============================================================
// SettingValue
// =============================================================

#[test]
fn display_formats_like_form_values() {
    assert_eq!(SettingValue::Bool(true).to_string(), "true");
    assert_eq!(SettingValue::from(42).to_string(), "42");
    assert_eq!(SettingValue::from("1m").to_string(), "1m");
}

#[test]
fn truthiness_matches_checkbox_expectations() {
    assert!(SettingValue::Bool(true).truthy());
    assert!(!SettingValue::from(0).truthy());
    assert!(SettingValue::from(3).truthy());
    assert!(!SettingValue::from("").truthy());
    assert!(SettingValue::from("on").truthy());
}
