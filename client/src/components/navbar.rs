//! Top bar greeting the learner, with the mobile menu toggle and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::components::sidebar::display_name;
use crate::routes::LOGIN_PATH;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let session = use_session();
    let navigate = use_navigate();

    let greeting = move || {
        let name = display_name(auth.get().user.as_ref().map(|u| u.name.as_str()));
        format!("Welcome, {name}")
    };

    let on_logout = move |_| {
        session.get().logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <button
                class="navbar__menu"
                title="Menu"
                on:click=move |_| ui.update(UiState::toggle_mobile_menu)
            >
                {move || if ui.get().mobile_menu_open { "\u{2715}" } else { "\u{2630}" }}
            </button>
            <h1 class="navbar__greeting">{greeting}</h1>
            <span class="navbar__spacer"></span>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
