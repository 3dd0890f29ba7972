//! Settings page: navigation plus the synchronized settings form.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::settings_form::SettingsForm;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings-page">
            <NavBar/>
            <header class="settings-page__header">
                <h1>"Settings"</h1>
            </header>
            <SettingsForm/>
        </div>
    }
}
