//! Navbar links and active-link matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/dashboard", label: "Dashboard" },
    NavLink { href: "/settings", label: "Settings" },
];

/// A link is active only when its `href` equals the current path exactly.
#[must_use]
pub fn is_active(href: &str, current_path: &str) -> bool {
    href == current_path
}

#[must_use]
pub fn link_class(href: &str, current_path: &str) -> &'static str {
    if is_active(href, current_path) { "active" } else { "" }
}
