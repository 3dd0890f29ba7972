//! Synchronizer configuration.
//!
//! The host page may embed a JSON object overriding any subset of fields;
//! missing fields take their defaults.
//!
//! ```json
//! { "endpoints": { "load": "/settings/load" }, "notify_on_load_error": true, "save_policy": "reject_while_in_flight" }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOAD_PATH: &str = "/settings/load";
pub const DEFAULT_SAVE_PATH: &str = "/settings/save";
pub const DEFAULT_DEFAULTS_PATH: &str = "/settings/default";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
    /// An endpoint path was empty.
    #[error("endpoint `{0}` must not be empty")]
    EmptyEndpoint(&'static str),
}

/// What to do when `save` is called while an earlier save has not finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePolicy {
    /// Let both requests race. The server decides the final state.
    #[default]
    Overlap,
    /// Refuse the second save with an error notification.
    RejectWhileInFlight,
}

/// Paths of the remote settings service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsEndpoints {
    pub load: String,
    pub save: String,
    pub defaults: String,
}

impl Default for SettingsEndpoints {
    fn default() -> Self {
        Self {
            load: DEFAULT_LOAD_PATH.to_owned(),
            save: DEFAULT_SAVE_PATH.to_owned(),
            defaults: DEFAULT_DEFAULTS_PATH.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub endpoints: SettingsEndpoints,
    /// Show an error notification when `load` fails. Off keeps load failures
    /// visible only in the console log.
    pub notify_on_load_error: bool,
    pub save_policy: SavePolicy,
}

impl SyncConfig {
    /// Parse config JSON supplied by the host page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyEndpoint`] when a path is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let endpoints = [
            ("load", &self.endpoints.load),
            ("save", &self.endpoints.save),
            ("defaults", &self.endpoints.defaults),
        ];
        for (name, path) in endpoints {
            if path.trim().is_empty() {
                return Err(ConfigError::EmptyEndpoint(name));
            }
        }
        Ok(())
    }

    /// Read config from the page, falling back to defaults.
    ///
    /// Looks for `<meta name="settings-config" content="...">`. Absent or
    /// malformed config is logged and replaced by [`SyncConfig::default`].
    pub fn from_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(raw) = crate::util::page::meta_content(PAGE_META_NAME) else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring settings config: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

/// `name` of the meta tag carrying page-supplied config.
pub const PAGE_META_NAME: &str = "settings-config";
