//! Keeps the settings document, the remote store and the form in agreement.
//!
//! SYSTEM CONTEXT
//! ==============
//! One synchronizer is built at page start and shared through context. Every
//! operation runs on the UI thread; async operations only suspend themselves.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to the caller. Remote failures are logged and,
//! on the save and reset paths, reported through exactly one notification per
//! attempt. Load failures are reported only when the config asks for it.
//!
//! CONCURRENCY
//! ===========
//! The document sits in a `RefCell` that is never borrowed across an await, so
//! overlapping saves are safe: each sends the snapshot taken when it started.

#[cfg(test)]
#[path = "synchronizer_test.rs"]
mod synchronizer_test;

use std::cell::{Cell, RefCell};

use super::binding::Binding;
use super::config::{SavePolicy, SyncConfig};
use super::document::SettingsDocument;
use super::surface::{Severity, Surface};
use crate::net::settings_api::SettingsService;
use crate::net::types::{SaveOutcome, SettingsError};

pub const MSG_SAVE_SUCCESS: &str = "Settings saved successfully";
pub const MSG_SAVE_FAILED: &str = "Failed to save settings";
pub const MSG_SAVE_ERROR: &str = "Error saving settings";
pub const MSG_SAVE_IN_FLIGHT: &str = "Settings are already being saved";
pub const MSG_LOAD_ERROR: &str = "Error loading settings";
pub const MSG_RESET_SUCCESS: &str = "Settings reset to default";
pub const MSG_RESET_ERROR: &str = "Error resetting settings";
pub const MSG_RESET_CONFIRM: &str = "Are you sure you want to reset all settings to default?";

/// Owner of the in-memory settings document.
pub struct SettingsSynchronizer<S, P> {
    service: S,
    surface: P,
    bindings: Vec<Binding>,
    config: SyncConfig,
    document: RefCell<Option<SettingsDocument>>,
    saves_in_flight: Cell<usize>,
}

/// Marks one save as running until dropped.
struct SaveTicket<'a>(&'a Cell<usize>);

impl Drop for SaveTicket<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

impl<S: SettingsService, P: Surface> SettingsSynchronizer<S, P> {
    pub fn new(service: S, surface: P, bindings: Vec<Binding>, config: SyncConfig) -> Self {
        Self {
            service,
            surface,
            bindings,
            config,
            document: RefCell::new(None),
            saves_in_flight: Cell::new(0),
        }
    }

    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[must_use]
    pub fn surface(&self) -> &P {
        &self.surface
    }

    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Snapshot of the current document, `None` until the first load.
    #[must_use]
    pub fn document(&self) -> Option<SettingsDocument> {
        self.document.borrow().clone()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.document.borrow().is_some()
    }

    #[must_use]
    pub fn saves_in_flight(&self) -> usize {
        self.saves_in_flight.get()
    }

    /// Fetch the document and reflect it onto the form.
    ///
    /// On failure the previous document (if any) is kept.
    pub async fn load(&self) {
        match self.service.load().await {
            Ok(document) => {
                log::debug!("settings loaded: {} categories", document.categories().count());
                self.replace(document);
                self.apply();
            }
            Err(e) => {
                log::error!("error loading settings: {e}");
                if self.config.notify_on_load_error {
                    self.surface.notify(MSG_LOAD_ERROR, Severity::Error);
                }
            }
        }
    }

    /// Reflect the document onto the theme and every bound element.
    ///
    /// No-op before the first load. Coordinates missing from the document
    /// are shown as the binding's fallback value.
    pub fn apply(&self) {
        let (theme, fields) = {
            let guard = self.document.borrow();
            let Some(document) = guard.as_ref() else {
                return;
            };
            let fields: Vec<_> = self
                .bindings
                .iter()
                .map(|binding| {
                    let value = document.get(&binding.category, &binding.setting);
                    if value.is_none() {
                        log::warn!("setting {} missing from document, using fallback", binding.coordinate());
                    }
                    (binding, binding.to_field(value))
                })
                .collect();
            (document.theme().map(theme_class), fields)
        };

        match theme {
            Some(class) => self.surface.set_theme_class(&class),
            None => log::warn!("display.theme missing from document, keeping current theme"),
        }
        for (binding, field) in fields {
            self.surface.write_field(binding, field);
        }
        self.surface.refresh_chart();
    }

    /// Copy every bound element's value back into the document.
    ///
    /// No-op before the first load. Elements the surface cannot read are
    /// skipped. Values are not validated.
    pub fn collect_from_form(&self) {
        let fields: Vec<_> = self
            .bindings
            .iter()
            .filter_map(|binding| self.surface.read_field(binding).map(|field| (binding, field)))
            .collect();

        let mut guard = self.document.borrow_mut();
        let Some(document) = guard.as_mut() else {
            log::debug!("collect skipped: settings not loaded");
            return;
        };
        for (binding, field) in fields {
            document.set(&binding.category, &binding.setting, binding.from_field(field));
        }
    }

    /// Live update after any bound element changes.
    pub fn on_field_changed(&self) {
        self.collect_from_form();
        self.apply();
    }

    /// Persist the current document. Shows exactly one notification.
    pub async fn save(&self) {
        let _ticket = match self.begin_save() {
            Ok(ticket) => ticket,
            Err(e) => {
                log::warn!("save refused: {e}");
                self.surface.notify(MSG_SAVE_IN_FLIGHT, Severity::Error);
                return;
            }
        };
        let Some(snapshot) = self.document() else {
            log::warn!("save requested before settings were loaded");
            self.surface.notify(MSG_SAVE_ERROR, Severity::Error);
            return;
        };

        match self.service.save(&snapshot).await {
            Ok(response) => match response.outcome() {
                SaveOutcome::Saved => {
                    log::debug!("settings saved");
                    self.surface.notify(MSG_SAVE_SUCCESS, Severity::Success);
                }
                SaveOutcome::Rejected { message } => {
                    log::warn!("settings save rejected: {}", message.as_deref().unwrap_or("no message"));
                    self.surface.notify(MSG_SAVE_FAILED, Severity::Error);
                }
            },
            Err(e) => {
                log::error!("error saving settings: {e}");
                self.surface.notify(MSG_SAVE_ERROR, Severity::Error);
            }
        }
    }

    /// Save-button path: collect the form, then save.
    pub async fn save_from_form(&self) {
        self.collect_from_form();
        self.save().await;
    }

    /// Replace the document with the server defaults after confirmation.
    ///
    /// Declining performs no request and leaves the document untouched.
    pub async fn reset_to_default(&self) {
        if !self.surface.confirm(MSG_RESET_CONFIRM) {
            log::debug!("settings reset declined");
            return;
        }
        match self.service.fetch_defaults().await {
            Ok(defaults) => {
                self.replace(defaults);
                self.apply();
                self.save().await;
                self.surface.notify(MSG_RESET_SUCCESS, Severity::Success);
            }
            Err(e) => {
                log::error!("error resetting settings: {e}");
                self.surface.notify(MSG_RESET_ERROR, Severity::Error);
            }
        }
    }

    fn replace(&self, document: SettingsDocument) {
        *self.document.borrow_mut() = Some(document);
    }

    fn begin_save(&self) -> Result<SaveTicket<'_>, SettingsError> {
        let running = self.saves_in_flight.get();
        if running > 0 && self.config.save_policy == SavePolicy::RejectWhileInFlight {
            return Err(SettingsError::SaveInFlight);
        }
        self.saves_in_flight.set(running + 1);
        Ok(SaveTicket(&self.saves_in_flight))
    }
}

/// Page class for a theme name: `dark` becomes `dark-theme`.
#[must_use]
pub fn theme_class(theme: &str) -> String {
    format!("{theme}-theme")
}
