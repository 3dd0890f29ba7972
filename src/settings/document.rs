//! Two-level settings document: `category -> (setting -> value)`.
//!
//! DESIGN
//! ======
//! The client enforces no schema. Whatever categories the server returns are
//! kept. Every top-level object is a category; other top-level entries (the
//! server's `last_updated` stamp, for one) ride along untouched as metadata.
//! Inside a category, non-scalar values are held beside the settings. A save
//! writes back what a load read.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::net::types::SettingsError;

/// Category holding the visual theme name.
pub const DISPLAY_CATEGORY: &str = "display";
/// Setting inside [`DISPLAY_CATEGORY`] naming the theme (`"dark"`, `"light"`).
pub const THEME_SETTING: &str = "theme";

/// A single setting value as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl SettingValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness used when a non-boolean value drives a checkbox.
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<SettingValue> for serde_json::Value {
    fn from(value: SettingValue) -> Self {
        match value {
            SettingValue::Bool(b) => Self::Bool(b),
            SettingValue::Number(n) => Self::Number(n),
            SettingValue::Text(s) => Self::String(s),
        }
    }
}

/// Settings within one category, keyed by setting name.
///
/// Entries that are not scalars (`null`, arrays, nested objects) are not
/// settings, but they stay in their category and are written back on save.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCategory", into = "RawCategory")]
pub struct Category {
    settings: BTreeMap<String, SettingValue>,
    passthrough: BTreeMap<String, serde_json::Value>,
}

type RawCategory = BTreeMap<String, serde_json::Value>;

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        let mut category = Self::default();
        for (name, value) in raw {
            let setting = match value {
                serde_json::Value::Bool(b) => SettingValue::Bool(b),
                serde_json::Value::Number(n) => SettingValue::Number(n),
                serde_json::Value::String(s) => SettingValue::Text(s),
                other => {
                    category.passthrough.insert(name, other);
                    continue;
                }
            };
            category.settings.insert(name, setting);
        }
        category
    }
}

impl From<Category> for RawCategory {
    fn from(category: Category) -> Self {
        let mut raw = category.passthrough;
        raw.extend(category.settings.into_iter().map(|(k, v)| (k, v.into())));
        raw
    }
}

impl Category {
    #[must_use]
    pub fn get(&self, setting: &str) -> Option<&SettingValue> {
        self.settings.get(setting)
    }

    /// Write a setting. A non-scalar entry of the same name is replaced.
    pub fn insert(&mut self, setting: &str, value: SettingValue) {
        self.passthrough.remove(setting);
        self.settings.insert(setting.to_owned(), value);
    }

    /// Non-scalar entry kept verbatim, if present.
    #[must_use]
    pub fn passthrough(&self, name: &str) -> Option<&serde_json::Value> {
        self.passthrough.get(name)
    }
}

/// The in-memory settings document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDocument", into = "RawDocument")]
pub struct SettingsDocument {
    categories: BTreeMap<String, Category>,
    metadata: BTreeMap<String, serde_json::Value>,
}

/// A top-level entry: any object is a category, anything else is metadata.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Category(Category),
    Other(serde_json::Value),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
struct RawDocument(BTreeMap<String, RawEntry>);

impl From<RawDocument> for SettingsDocument {
    fn from(raw: RawDocument) -> Self {
        let mut doc = Self::default();
        for (key, entry) in raw.0 {
            match entry {
                RawEntry::Category(category) => {
                    doc.categories.insert(key, category);
                }
                RawEntry::Other(value) => {
                    doc.metadata.insert(key, value);
                }
            }
        }
        doc
    }
}

impl From<SettingsDocument> for RawDocument {
    fn from(doc: SettingsDocument) -> Self {
        let mut raw: BTreeMap<String, RawEntry> = doc
            .metadata
            .into_iter()
            .map(|(k, v)| (k, RawEntry::Other(v)))
            .collect();
        for (key, category) in doc.categories {
            raw.insert(key, RawEntry::Category(category));
        }
        Self(raw)
    }
}

impl SettingsDocument {
    /// Parse a document from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Decode`] when the body is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(raw).map_err(|e| SettingsError::Decode(e.to_string()))
    }

    /// Serialize the document to a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(|e| SettingsError::Encode(e.to_string()))
    }

    #[must_use]
    pub fn get(&self, category: &str, setting: &str) -> Option<&SettingValue> {
        self.categories.get(category)?.get(setting)
    }

    /// Write a value, creating the category when it does not exist yet.
    ///
    /// A new category takes the place of any metadata entry with its name.
    pub fn set(&mut self, category: &str, setting: &str, value: SettingValue) {
        if !self.categories.contains_key(category) {
            self.metadata.remove(category);
        }
        self.categories
            .entry(category.to_owned())
            .or_default()
            .insert(setting, value);
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    /// Theme name stored at `display.theme`, if it is a string.
    #[must_use]
    pub fn theme(&self) -> Option<&str> {
        self.get(DISPLAY_CATEGORY, THEME_SETTING)?.as_str()
    }
}
