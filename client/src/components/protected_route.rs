//! Route guard wrapping pages that require a signed-in learner.
//!
//! SYSTEM CONTEXT
//! ==============
//! While the session is loading the guard shows a skeleton and never
//! redirects, so a reload with a valid snapshot does not flash the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

/// Render `children` only for a loaded, authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    move || match guard_decision(&auth.get()) {
        GuardDecision::Placeholder => view! { <PageSkeleton/> }.into_any(),
        GuardDecision::Redirect => ().into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

/// Grey blocks standing in for a dashboard while the session loads.
#[component]
pub fn PageSkeleton() -> impl IntoView {
    view! {
        <div class="page-skeleton" aria-busy="true">
            <div class="skeleton skeleton--banner"></div>
            <div class="page-skeleton__grid">
                <div class="skeleton skeleton--card"></div>
                <div class="skeleton skeleton--card"></div>
                <div class="skeleton skeleton--card"></div>
            </div>
        </div>
    }
}
