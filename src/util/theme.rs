//! Light/dark theme persistence and toggle.
//!
//! Reads the saved theme class from `localStorage` once at page load and
//! adds it to `<body>`. Toggling flips both theme classes on `<body>` and
//! stores whichever one ends up present. [`ThemeTracker`] is the page-wide
//! record of the current theme, fed by the toggle and by applied settings.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR and test
//! builds use [`BrowserThemeHost`] as a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "light-theme" => Some(Self::Light),
            "dark-theme" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Icon for the toggle button, showing the theme a click switches to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }
}

/// `<body>` class list and theme storage.
pub trait ThemeHost {
    fn body_has_class(&self, class: &str) -> bool;
    fn add_body_class(&self, class: &str);
    fn toggle_body_class(&self, class: &str);
    fn stored_theme(&self) -> Option<String>;
    fn store_theme(&self, class: &str);
}

/// Apply the saved theme, if any. Unknown stored values are ignored.
pub fn restore(host: &impl ThemeHost) -> Option<Theme> {
    let saved = host.stored_theme()?;
    let Some(theme) = Theme::from_class(&saved) else {
        log::warn!("ignoring unknown stored theme {saved:?}");
        return None;
    };
    host.add_body_class(theme.class_name());
    Some(theme)
}

/// Flip the theme classes and persist the result.
pub fn toggle(host: &impl ThemeHost) -> Theme {
    host.toggle_body_class(Theme::Light.class_name());
    host.toggle_body_class(Theme::Dark.class_name());
    let next = if host.body_has_class(Theme::Light.class_name()) {
        Theme::Light
    } else {
        Theme::Dark
    };
    host.store_theme(next.class_name());
    next
}

/// Current page theme, shared by the toggle button and the settings surface.
///
/// Storage is consulted by the first [`ThemeTracker::restore`] only. Later
/// calls report the tracked theme and leave `<body>` alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeTracker {
    restored: bool,
    current: Option<Theme>,
}

impl ThemeTracker {
    /// Apply the saved theme on the first call.
    ///
    /// A theme already recorded through [`ThemeTracker::follow_class`] wins
    /// over storage.
    pub fn restore(&mut self, host: &impl ThemeHost) -> Option<Theme> {
        if !self.restored {
            self.restored = true;
            if self.current.is_none() {
                self.current = restore(host);
            }
        }
        self.current
    }

    pub fn toggle(&mut self, host: &impl ThemeHost) -> Theme {
        let next = toggle(host);
        self.current = Some(next);
        next
    }

    /// Record a theme class that other code put on `<body>`.
    pub fn follow_class(&mut self, class: &str) {
        self.current = Theme::from_class(class);
    }

    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.current
    }
}

/// [`ThemeHost`] over `document.body` and `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeHost;

#[cfg(feature = "hydrate")]
fn body_classes() -> Option<web_sys::DomTokenList> {
    let body = web_sys::window()?.document()?.body()?;
    Some(body.class_list())
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl ThemeHost for BrowserThemeHost {
    fn body_has_class(&self, class: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            body_classes().is_some_and(|list| list.contains(class))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
            false
        }
    }

    fn add_body_class(&self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(list) = body_classes() {
                let _ = list.add_1(class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }

    fn toggle_body_class(&self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(list) = body_classes() {
                let _ = list.toggle(class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }

    fn stored_theme(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store_theme(&self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.set_item(STORAGE_KEY, class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }
}
