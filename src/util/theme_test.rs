use super::*;
use std::cell::RefCell;
use std::collections::BTreeSet;

#[derive(Default)]
struct MemoryHost {
    classes: RefCell<BTreeSet<String>>,
    stored: RefCell<Option<String>>,
}

impl MemoryHost {
    fn new(classes: &[&str], stored: Option<&str>) -> Self {
        Self {
            classes: RefCell::new(classes.iter().map(|c| (*c).to_owned()).collect()),
            stored: RefCell::new(stored.map(str::to_owned)),
        }
    }

    fn snapshot(&self) -> (BTreeSet<String>, Option<String>) {
        (self.classes.borrow().clone(), self.stored.borrow().clone())
    }
}

impl ThemeHost for MemoryHost {
    fn body_has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_body_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn toggle_body_class(&self, class: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.remove(class) {
            classes.insert(class.to_owned());
        }
    }

    fn stored_theme(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    fn store_theme(&self, class: &str) {
        *self.stored.borrow_mut() = Some(class.to_owned());
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn class_names_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_class(theme.class_name()), Some(theme));
    }
    assert_eq!(Theme::from_class("blue-theme"), None);
}

#[test]
fn icon_shows_opposite_theme() {
    assert_eq!(Theme::Light.icon_class(), "fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fa-sun");
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_adds_saved_class() {
    let host = MemoryHost::new(&[], Some("light-theme"));
    assert_eq!(restore(&host), Some(Theme::Light));
    assert!(host.body_has_class("light-theme"));
}

#[test]
fn restore_without_saved_theme_changes_nothing() {
    let host = MemoryHost::new(&["dark-theme"], None);
    assert_eq!(restore(&host), None);
    assert_eq!(host.snapshot(), MemoryHost::new(&["dark-theme"], None).snapshot());
}

#[test]
fn restore_ignores_unknown_value() {
    let host = MemoryHost::new(&[], Some("neon"));
    assert_eq!(restore(&host), None);
    assert!(host.classes.borrow().is_empty());
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_dark_switches_to_light() {
    let host = MemoryHost::new(&["dark-theme"], Some("dark-theme"));
    assert_eq!(toggle(&host), Theme::Light);
    assert!(host.body_has_class("light-theme"));
    assert!(!host.body_has_class("dark-theme"));
    assert_eq!(host.stored_theme().as_deref(), Some("light-theme"));
}

#[test]
fn toggle_twice_restores_classes_and_storage() {
    for start in ["dark-theme", "light-theme"] {
        let host = MemoryHost::new(&[start, "sidebar-open"], Some(start));
        let before = host.snapshot();
        toggle(&host);
        toggle(&host);
        assert_eq!(host.snapshot(), before);
    }
}

// =============================================================
// ThemeTracker
// =============================================================

#[test]
fn tracker_reads_storage_only_once() {
    let host = MemoryHost::new(&[], Some("dark-theme"));
    let mut tracker = ThemeTracker::default();
    assert_eq!(tracker.restore(&host), Some(Theme::Dark));

    // Settings switch the page to light while storage still says dark.
    host.classes.borrow_mut().clear();
    host.add_body_class("light-theme");
    tracker.follow_class("light-theme");

    // Remounting the toggle restores again.
    assert_eq!(tracker.restore(&host), Some(Theme::Light));
    assert!(!host.body_has_class("dark-theme"));
    assert!(host.body_has_class("light-theme"));
}

#[test]
fn tracker_prefers_applied_theme_over_storage() {
    let host = MemoryHost::new(&["light-theme"], Some("dark-theme"));
    let mut tracker = ThemeTracker::default();
    tracker.follow_class("light-theme");
    assert_eq!(tracker.restore(&host), Some(Theme::Light));
    assert!(!host.body_has_class("dark-theme"));
}

#[test]
fn tracker_follows_toggle_and_applied_classes() {
    let host = MemoryHost::new(&["dark-theme"], None);
    let mut tracker = ThemeTracker::default();
    assert_eq!(tracker.restore(&host), None);
    assert_eq!(tracker.toggle(&host), Theme::Light);
    assert_eq!(tracker.current(), Some(Theme::Light));
    tracker.follow_class("dark-theme");
    assert_eq!(tracker.current(), Some(Theme::Dark));
    tracker.follow_class("sepia-theme");
    assert_eq!(tracker.current(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_host_is_inert_outside_browser() {
    let host = BrowserThemeHost;
    assert_eq!(restore(&host), None);
    assert_eq!(toggle(&host), Theme::Dark);
}
