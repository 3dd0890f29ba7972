use super::*;

#[test]
fn exact_path_is_active() {
    assert!(is_active("/settings", "/settings"));
    assert_eq!(link_class("/settings", "/settings"), "active");
}

#[test]
fn prefix_match_is_not_active() {
    assert!(!is_active("/", "/settings"));
    assert!(!is_active("/settings", "/settings/advanced"));
    assert_eq!(link_class("/", "/dashboard"), "");
}

#[test]
fn trailing_slash_is_a_different_path() {
    assert!(!is_active("/dashboard", "/dashboard/"));
}

#[test]
fn exactly_one_link_active_per_known_path() {
    for link in NAV_LINKS {
        let active = NAV_LINKS.iter().filter(|l| is_active(l.href, link.href)).count();
        assert_eq!(active, 1, "path {}", link.href);
    }
}

#[test]
fn unknown_path_activates_nothing() {
    assert!(NAV_LINKS.iter().all(|l| !is_active(l.href, "/export")));
}
