//! Settings form: one input per binding plus save and reset triggers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs mirror `FormState`; every change is written there first and then
//! pushed through the synchronizer so the theme follows the form live.

use leptos::prelude::*;

use crate::settings::binding::{Binding, FieldValue, ValueKind};
use crate::settings::browser::use_synchronizer;
use crate::state::form::FormState;

fn field_label(binding: &Binding) -> &'static str {
    match binding.element_id.as_str() {
        "display-theme" => "Theme",
        "display-default-chart-view" => "Default chart view",
        "display-default-scale" => "Default scale",
        "notifications-email-enabled" => "Email notifications",
        "notifications-browser-enabled" => "Browser notifications",
        "notifications-frequency" => "Notification frequency",
        "data-moving-average" => "Moving average (days)",
        "data-auto-refresh" => "Auto refresh (seconds)",
        _ => "",
    }
}

fn choice_options(binding: &Binding) -> &'static [(&'static str, &'static str)] {
    match binding.element_id.as_str() {
        "display-theme" => &[("dark", "Dark"), ("light", "Light")],
        "display-default-chart-view" => &[("1w", "1 week"), ("1m", "1 month"), ("3m", "3 months"), ("1y", "1 year")],
        "display-default-scale" => &[("linear", "Linear"), ("log", "Logarithmic")],
        "notifications-frequency" => &[("realtime", "Real time"), ("daily", "Daily"), ("weekly", "Weekly")],
        _ => &[],
    }
}

fn field_view(
    binding: Binding,
    form: RwSignal<FormState>,
    on_changed: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let label = field_label(&binding);
    let id = binding.element_id.clone();
    let read_id = id.clone();
    let write_id = id.clone();

    let input = match binding.kind {
        ValueKind::Checkbox => view! {
            <input
                type="checkbox"
                id=id.clone()
                prop:checked=move || form.with(|f| f.checked(&read_id))
                on:change=move |ev| {
                    form.update(|f| f.set(&write_id, FieldValue::Checked(event_target_checked(&ev))));
                    on_changed();
                }
            />
        }
        .into_any(),
        ValueKind::Choice => view! {
            <select
                id=id.clone()
                prop:value=move || form.with(|f| f.text(&read_id))
                on:change=move |ev| {
                    form.update(|f| f.set(&write_id, FieldValue::Text(event_target_value(&ev))));
                    on_changed();
                }
            >
                {choice_options(&binding)
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        ValueKind::Text | ValueKind::Number => {
            let input_type = if binding.kind == ValueKind::Number { "number" } else { "text" };
            view! {
                <input
                    type=input_type
                    id=id.clone()
                    prop:value=move || form.with(|f| f.text(&read_id))
                    on:change=move |ev| {
                        form.update(|f| f.set(&write_id, FieldValue::Text(event_target_value(&ev))));
                        on_changed();
                    }
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="setting-item">
            <label for=id>{label}</label>
            {input}
        </div>
    }
    .into_any()
}

#[component]
pub fn SettingsForm() -> impl IntoView {
    let sync = use_synchronizer();
    let form = expect_context::<RwSignal<FormState>>();
    let bindings = sync.with_value(|s| s.bindings().to_vec());

    let on_changed = move || sync.with_value(|s| s.on_field_changed());

    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let sync = sync.get_value();
            leptos::task::spawn_local(async move {
                sync.save_from_form().await;
            });
        }
    };

    let on_reset = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let sync = sync.get_value();
            leptos::task::spawn_local(async move {
                sync.reset_to_default().await;
            });
        }
    };

    view! {
        <section class="settings-panel">
            <form class="settings-form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                {bindings
                    .into_iter()
                    .map(|binding| field_view(binding, form, on_changed))
                    .collect_view()}
            </form>
            <div class="settings-actions">
                <button id="save-settings" class="btn btn--primary" on:click=on_save>
                    "Save settings"
                </button>
                <button id="reset-settings" class="btn" on:click=on_reset>
                    "Reset to default"
                </button>
            </div>
        </section>
    }
}
