//! Route paths and the static navigation menu.
//!
//! DESIGN
//! ======
//! Paths live here as constants. Redirects, links and the router table in
//! `app.rs` (through [`segment`]) all read them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LEARNING_PATH_PATH: &str = "/learning-path";
pub const TUTOR_CHAT_PATH: &str = "/tutor-chat";
pub const QUIZ_PATH: &str = "/quiz";
pub const PROGRESS_PATH: &str = "/progress";
pub const RESOURCES_PATH: &str = "/resources";
pub const PROFILE_PATH: &str = "/profile";
pub const SETTINGS_PATH: &str = "/settings";

/// Query parameter carrying the learning-path subject hint.
pub const SUBJECT_PARAM: &str = "subject";
/// Subject shown when no hint is given.
pub const DEFAULT_SUBJECT: &str = "math";

/// One entry in the sidebar menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { path: DASHBOARD_PATH, label: "Dashboard" },
    NavItem { path: LEARNING_PATH_PATH, label: "Learning Path" },
    NavItem { path: TUTOR_CHAT_PATH, label: "Chat with Tutor" },
    NavItem { path: QUIZ_PATH, label: "Quizzes" },
    NavItem { path: PROGRESS_PATH, label: "Progress" },
    NavItem { path: RESOURCES_PATH, label: "Resources" },
    NavItem { path: PROFILE_PATH, label: "Profile" },
    NavItem { path: SETTINGS_PATH, label: "Settings" },
];

/// Router segment for a path constant: the path without its leading `/`.
pub fn segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}

/// Whether `pathname` should highlight `item` (exact match, trailing slash ignored).
pub fn is_active(pathname: &str, item: &NavItem) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { HOME_PATH } else { trimmed };
    trimmed == item.path
}

/// Link to the learning path, optionally focused on one subject.
pub fn learning_path_href(subject: Option<&str>) -> String {
    match subject.map(str::trim).filter(|s| !s.is_empty()) {
        Some(subject) => format!("{LEARNING_PATH_PATH}?{SUBJECT_PARAM}={subject}"),
        None => LEARNING_PATH_PATH.to_owned(),
    }
}

/// Resolve the subject hint read from the query string.
pub fn resolve_subject(hint: Option<&str>) -> String {
    hint.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SUBJECT)
        .to_ascii_lowercase()
}
