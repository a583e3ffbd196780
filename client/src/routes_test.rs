use super::*;

#[test]
fn nav_items_have_unique_paths() {
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        for b in &NAV_ITEMS[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn nav_items_are_all_protected_pages() {
    for item in &NAV_ITEMS {
        assert_ne!(item.path, LOGIN_PATH);
        assert_ne!(item.path, REGISTER_PATH);
        assert_ne!(item.path, AUTH_PATH);
    }
}

#[test]
fn is_active_matches_exact_path() {
    let item = NAV_ITEMS[0];
    assert!(is_active("/dashboard", &item));
    assert!(is_active("/dashboard/", &item));
    assert!(!is_active("/dashboards", &item));
    assert!(!is_active("/", &item));
}

#[test]
fn learning_path_href_without_subject() {
    assert_eq!(learning_path_href(None), "/learning-path");
    assert_eq!(learning_path_href(Some("  ")), "/learning-path");
}

#[test]
fn learning_path_href_with_subject() {
    assert_eq!(learning_path_href(Some("science")), "/learning-path?subject=science");
}

#[test]
fn resolve_subject_defaults_to_math() {
    assert_eq!(resolve_subject(None), "math");
    assert_eq!(resolve_subject(Some("")), "math");
}

#[test]
fn resolve_subject_normalizes_case() {
    assert_eq!(resolve_subject(Some(" History ")), "history");
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(segment(HOME_PATH), "");
    assert_eq!(segment(AUTH_PATH), "auth");
    assert_eq!(segment(LEARNING_PATH_PATH), "learning-path");
}

#[test]
fn nav_item_paths_are_single_segments() {
    for item in &NAV_ITEMS {
        let seg = segment(item.path);
        assert!(!seg.is_empty());
        assert!(!seg.contains('/'), "{} is nested", item.path);
    }
}
