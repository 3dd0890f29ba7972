//! Browser wiring: the real page surface and the shared synchronizer handle.
//!
//! DESIGN
//! ======
//! The synchronizer holds `RefCell` state and is not `Send`, so the context
//! value is a local-storage `StoredValue` wrapping an `Rc`. The handle itself
//! is `Copy` and can move into event-handler closures.

use std::rc::Rc;

use leptos::prelude::*;

use super::binding::{Binding, FieldValue};
use super::config::SyncConfig;
use super::surface::{Severity, Surface};
use super::synchronizer::SettingsSynchronizer;
use crate::net::settings_api::HttpSettingsService;
use crate::state::form::FormState;
use crate::state::toast::ToastState;
use crate::util::page;
use crate::util::theme::ThemeTracker;

/// [`Surface`] backed by the form/toast/theme signals and the page `<body>`.
#[derive(Clone, Copy)]
pub struct BrowserSurface {
    form: RwSignal<FormState>,
    toasts: RwSignal<ToastState>,
    theme: RwSignal<ThemeTracker>,
}

impl BrowserSurface {
    pub fn new(form: RwSignal<FormState>, toasts: RwSignal<ToastState>, theme: RwSignal<ThemeTracker>) -> Self {
        Self { form, toasts, theme }
    }
}

impl Surface for BrowserSurface {
    fn set_theme_class(&self, class: &str) {
        page::set_body_class(class);
        self.theme.update(|tracker| tracker.follow_class(class));
    }

    fn write_field(&self, binding: &Binding, value: FieldValue) {
        self.form.update(|form| form.set(&binding.element_id, value));
    }

    fn read_field(&self, binding: &Binding) -> Option<FieldValue> {
        self.form.with_untracked(|form| form.get(&binding.element_id).cloned())
    }

    fn refresh_chart(&self) {
        page::refresh_chart();
    }

    fn confirm(&self, message: &str) -> bool {
        page::confirm(message)
    }

    fn notify(&self, message: &str, severity: Severity) {
        crate::components::toast_host::show(self.toasts, message, severity);
    }
}

pub type BrowserSynchronizer = SettingsSynchronizer<HttpSettingsService, BrowserSurface>;

/// Context handle for the page's one synchronizer.
pub type SyncHandle = StoredValue<Rc<BrowserSynchronizer>, LocalStorage>;

/// Build the synchronizer, provide it as context and start the initial load.
pub fn provide_synchronizer(
    bindings: Vec<Binding>,
    config: SyncConfig,
    form: RwSignal<FormState>,
    toasts: RwSignal<ToastState>,
    theme: RwSignal<ThemeTracker>,
) -> SyncHandle {
    let service = HttpSettingsService::new(config.endpoints.clone());
    let surface = BrowserSurface::new(form, toasts, theme);
    let sync = Rc::new(SettingsSynchronizer::new(service, surface, bindings, config));
    let handle: SyncHandle = StoredValue::new_local(Rc::clone(&sync));
    provide_context(handle);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        sync.load().await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(sync);

    handle
}

/// The synchronizer provided by [`provide_synchronizer`].
pub fn use_synchronizer() -> SyncHandle {
    expect_context::<SyncHandle>()
}
