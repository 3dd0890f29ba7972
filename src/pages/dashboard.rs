//! Dashboard page hosting the price chart.
//!
//! The chart itself is drawn by the host page's `updateChart` script into
//! `#price-chart`; this page only provides the navigation and the mount point.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <NavBar/>
            <div id="price-chart" class="dashboard-page__chart"></div>
        </div>
    }
}
