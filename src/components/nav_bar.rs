//! Top navigation bar with the active page highlighted.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::theme_toggle::ThemeToggle;
use crate::util::nav::{NAV_LINKS, link_class};

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="navbar">
            <ul class="navbar-menu">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let href = link.href;
                        view! {
                            <li>
                                <a href=href class=move || link_class(href, &pathname.get())>
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ThemeToggle/>
        </nav>
    }
}
