//! HTTP client for the remote settings service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with a transport
//! error since the endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Load and default fetches treat a non-2xx status as a failure. Save reads
//! the body first: the service reports logical failures as JSON with a
//! non-success `status`, and that must reach the caller as a response, not an
//! error. Only an unreadable body on a non-2xx save becomes `HttpStatus`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "settings_api_test.rs"]
mod settings_api_test;

use async_trait::async_trait;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::types::{SaveResponse, SettingsError};
use crate::settings::config::SettingsEndpoints;
use crate::settings::document::SettingsDocument;

/// Remote store for the settings document.
#[async_trait(?Send)]
pub trait SettingsService {
    /// Fetch the user's current document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] on transport failure or an undecodable body.
    async fn load(&self) -> Result<SettingsDocument, SettingsError>;

    /// Persist `document` and return the service's status body.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] on transport failure or an undecodable body.
    async fn save(&self, document: &SettingsDocument) -> Result<SaveResponse, SettingsError>;

    /// Fetch the server-chosen default document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] on transport failure or an undecodable body.
    async fn fetch_defaults(&self) -> Result<SettingsDocument, SettingsError>;
}

/// [`SettingsService`] over `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpSettingsService {
    // Only read by the browser transport.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    endpoints: SettingsEndpoints,
}

impl HttpSettingsService {
    pub fn new(endpoints: SettingsEndpoints) -> Self {
        Self { endpoints }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a body that must succeed at the HTTP level.
#[cfg(any(test, feature = "hydrate"))]
fn decode_strict<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, SettingsError> {
    if !is_success(status) {
        return Err(SettingsError::HttpStatus(status));
    }
    serde_json::from_str(body).map_err(|e| SettingsError::Decode(e.to_string()))
}

/// Decode a body whose JSON carries its own status, whatever the HTTP code.
#[cfg(any(test, feature = "hydrate"))]
fn decode_lenient<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, SettingsError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(_) if !is_success(status) => Err(SettingsError::HttpStatus(status)),
        Err(e) => Err(SettingsError::Decode(e.to_string())),
    }
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<(u16, String), SettingsError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| SettingsError::Transport(e.to_string()))?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
async fn get_document(url: &str) -> Result<SettingsDocument, SettingsError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| SettingsError::Transport(e.to_string()))?;
    let (status, body) = read_response(resp).await?;
    decode_strict(status, &body)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, SettingsError> {
    Err(SettingsError::Transport("not available on server".to_owned()))
}

#[async_trait(?Send)]
impl SettingsService for HttpSettingsService {
    async fn load(&self) -> Result<SettingsDocument, SettingsError> {
        #[cfg(feature = "hydrate")]
        {
            get_document(&self.endpoints.load).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            unavailable()
        }
    }

    async fn save(&self, document: &SettingsDocument) -> Result<SaveResponse, SettingsError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoints.save)
                .json(document)
                .map_err(|e| SettingsError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| SettingsError::Transport(e.to_string()))?;
            let (status, body) = read_response(resp).await?;
            decode_lenient(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = document;
            unavailable()
        }
    }

    async fn fetch_defaults(&self) -> Result<SettingsDocument, SettingsError> {
        #[cfg(feature = "hydrate")]
        {
            get_document(&self.endpoints.defaults).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            unavailable()
        }
    }
}
