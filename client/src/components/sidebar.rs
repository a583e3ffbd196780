//! Collapsible sidebar with the learner badge and the main navigation menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session for display only. The one mutation it can trigger is
//! logout, which goes through the session service.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_session;
use crate::routes::{DASHBOARD_PATH, LOGIN_PATH, NAV_ITEMS, is_active};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

const FALLBACK_NAME: &str = "Student";

/// Name to show for the learner; blank names fall back to "Student".
pub fn display_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_owned(),
        _ => FALLBACK_NAME.to_owned(),
    }
}

/// Uppercased first character of the display name.
pub fn avatar_initial(name: Option<&str>) -> String {
    display_name(name)
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// First character of a menu label, shown when the sidebar is collapsed.
pub fn short_label(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

/// Sidebar for every protected page.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let session = use_session();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let collapsed = move || ui.get().sidebar_collapsed;
    let name = move || display_name(auth.get().user.as_ref().map(|u| u.name.as_str()));
    let initial = move || avatar_initial(auth.get().user.as_ref().map(|u| u.name.as_str()));
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| {
        session.get().logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <aside
            class="sidebar"
            class:sidebar--collapsed=collapsed
            class:sidebar--mobile-open=move || ui.get().mobile_menu_open
        >
            <div class="sidebar__header">
                <Show when=move || !collapsed()>
                    <a href=DASHBOARD_PATH class="sidebar__brand">"EduMentor"</a>
                </Show>
                <button
                    class="sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    {move || if collapsed() { "\u{25B6}" } else { "\u{25C0}" }}
                </button>
            </div>

            <div class="sidebar__user">
                <span class="sidebar__avatar">{initial}</span>
                <Show when=move || !collapsed()>
                    <div class="sidebar__identity">
                        <p class="sidebar__name">{name}</p>
                        <p class="sidebar__email">{email}</p>
                    </div>
                </Show>
            </div>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        let short = short_label(item.label);
                        view! {
                            <a
                                href=item.path
                                class="sidebar__link"
                                title=item.label
                                class:sidebar__link--active=move || {
                                    is_active(&pathname.get(), &item)
                                }
                                on:click=move |_| ui.update(UiState::on_navigate)
                            >
                                {move || if collapsed() { short.clone() } else { item.label.to_owned() }}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <button class="sidebar__logout" on:click=on_logout>
                "Logout"
            </button>
        </aside>
    }
}
