//! Public landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::{LOGIN_PATH, REGISTER_PATH};
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_forward;

const FEATURES: [(&str, &str); 4] = [
    (
        "Personalized Learning",
        "Learning paths tailored to your learning style and pace.",
    ),
    ("24/7 AI Tutor", "Get help with challenging topics whenever you need it."),
    ("Progress Tracking", "See your learning journey at a glance."),
    ("Rich Resources", "Curated material based on your interests and goals."),
];

/// Landing page; signed-in learners are forwarded to the dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_authed_forward(auth, use_navigate());

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Your Personal AI Tutor"</h1>
                <p>"Personalized learning that adapts to your style and pace."</p>
                <div class="home-page__actions">
                    <a href=REGISTER_PATH class="btn btn--primary">"Get Started"</a>
                    <a href=LOGIN_PATH class="btn">"Sign In"</a>
                </div>
            </section>
            <section class="home-page__features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="feature-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
