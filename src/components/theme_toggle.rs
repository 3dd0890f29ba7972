//! Navbar button switching between the light and dark theme.

use leptos::prelude::*;

use crate::util::theme::{BrowserThemeHost, Theme, ThemeTracker};

/// Reads and flips the page-wide [`ThemeTracker`] provided by `App`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeTracker>>();

    let on_click = move |_| {
        theme.update(|tracker| {
            tracker.toggle(&BrowserThemeHost);
        });
    };

    let icon_class = move || {
        let icon = theme
            .with(ThemeTracker::current)
            .map_or(Theme::Dark.icon_class(), Theme::icon_class);
        format!("fas {icon}")
    };

    view! {
        <button class="theme-toggle" on:click=on_click title="Toggle theme">
            <i class=icon_class></i>
        </button>
    }
}
