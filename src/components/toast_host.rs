//! Notification sink: renders queued toasts and drives their timers.

use leptos::prelude::*;

use crate::settings::surface::Severity;
use crate::state::toast::{Toast, ToastState};

/// Queue a toast and schedule its show/dismiss/remove transitions.
pub fn show(toasts: RwSignal<ToastState>, message: &str, severity: Severity) {
    let Some(id) = toasts.try_update(|state| state.push(message, severity)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        while let Some(phase) = toasts.with_untracked(|state| state.phase(id)) {
            gloo_timers::future::TimeoutFuture::new(phase.dwell_ms()).await;
            toasts.update(|state| {
                state.advance(id);
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Stack of transient notifications appended to the page.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="notification-stack">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = move || {
                        toasts
                            .with(|state| state.toasts().iter().find(|t| t.id == id).map(Toast::class))
                            .unwrap_or_default()
                    };
                    view! { <div class=class>{toast.message}</div> }
                }
            />
        </div>
    }
}
