//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{dashboard::DashboardPage, settings::SettingsPage};
use crate::settings::binding::dashboard_bindings;
use crate::settings::browser::provide_synchronizer;
use crate::settings::config::SyncConfig;
use crate::state::form::FormState;
use crate::state::toast::ToastState;
use crate::util::theme::ThemeTracker;

/// HTML shell for hosts that render the app on the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the page's settings synchronizer once and shares it, together with
/// the form, toast and theme state, through context. The saved theme is
/// restored here so route changes never repeat it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bindings = dashboard_bindings();
    let form = RwSignal::new(FormState::for_bindings(&bindings));
    let toasts = RwSignal::new(ToastState::default());
    let theme = RwSignal::new(ThemeTracker::default());
    provide_context(form);
    provide_context(toasts);
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        theme.update(|tracker| {
            tracker.restore(&crate::util::theme::BrowserThemeHost);
        });
    });

    provide_synchronizer(bindings, SyncConfig::from_page(), form, toasts, theme);

    view! {
        <Stylesheet id="leptos" href="/pkg/fomo-dashboard.css"/>
        <Title text="FOMO Tracker"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
