//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected pages bounce
//! anonymous visitors to `/login`, public entry pages forward signed-in users
//! to `/dashboard`. Both decisions are pure functions of [`AuthState`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{DASHBOARD_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;

/// What a protected route should render for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading: show the skeleton, do not redirect.
    Placeholder,
    /// Loaded with no user: send the visitor to the login page.
    Redirect,
    /// Loaded with a user: render the guarded page.
    Render,
}

pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Placeholder
    } else if !state.is_authenticated() {
        GuardDecision::Redirect
    } else {
        GuardDecision::Render
    }
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    guard_decision(state) == GuardDecision::Redirect
}

/// Public entry pages skip ahead once a loaded session has a user.
pub fn should_forward_authed(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, replace_history());
        }
    });
}

/// Redirect to `/dashboard` whenever auth has loaded and a user is present.
pub fn install_authed_forward<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_forward_authed(&auth.get()) {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
