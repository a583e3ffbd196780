use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn auth_state_with_user_is_authenticated() {
    let state = AuthState {
        user: Some(User {
            id: "user-1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            learning_style: None,
            subjects: None,
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
