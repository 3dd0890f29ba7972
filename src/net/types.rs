//! Wire DTOs and error types for the settings HTTP surface.
//!
//! DESIGN
//! ======
//! The save endpoint answers with a loose `{status, message?}` object. Only
//! the literal `"success"` counts as saved; every other shape, including a
//! missing `status`, is a logical rejection rather than a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Errors produced by settings service calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The request could not be sent or no response arrived.
    #[error("settings request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx HTTP status.
    #[error("settings request returned HTTP {0}")]
    HttpStatus(u16),
    /// The response body was not JSON or not a settings document.
    #[error("settings response decode failed: {0}")]
    Decode(String),
    /// The in-memory document could not be serialized.
    #[error("settings encode failed: {0}")]
    Encode(String),
    /// A save was refused because another one has not finished yet.
    #[error("save already in progress")]
    SaveInFlight,
}

/// Raw body returned by `POST /settings/save`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Logical result of a save once the transport succeeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Rejected { message: Option<String> },
}

impl SaveResponse {
    /// Classify the response by its `status` field alone.
    #[must_use]
    pub fn outcome(self) -> SaveOutcome {
        if self.status.as_deref() == Some("success") {
            SaveOutcome::Saved
        } else {
            SaveOutcome::Rejected { message: self.message }
        }
    }
}

