//! Dashboard: greeting, followed subjects and quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Subject cards link into the
//! learning path with a subject hint.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::pages::learning_path::SUBJECTS;
use crate::routes::{PROFILE_PATH, QUIZ_PATH, TUTOR_CHAT_PATH, learning_path_href};
use crate::state::auth::AuthState;

const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("Chat with Tutor", TUTOR_CHAT_PATH),
    ("Take a Quiz", QUIZ_PATH),
    ("Update Profile", PROFILE_PATH),
];

/// One-line summary of the learner's followed subjects.
pub(crate) fn subject_summary(subjects: &[String]) -> String {
    if subjects.is_empty() {
        "No subjects selected yet.".to_owned()
    } else {
        subjects.join(", ")
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let followed = move || {
        auth.get()
            .user
            .map(|u| subject_summary(u.subject_list()))
            .unwrap_or_default()
    };

    view! {
        <DashboardLayout>
            <section class="dashboard-page__welcome">
                <h2>"Continue learning"</h2>
                <p class="dashboard-page__subjects">{followed}</p>
            </section>

            <div class="dashboard-page__cards">
                {SUBJECTS
                    .iter()
                    .map(|(id, label)| {
                        view! {
                            <a class="subject-card" href=learning_path_href(Some(*id))>
                                <span class="subject-card__name">{*label}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="dashboard-page__actions">
                <a class="btn" href=learning_path_href(None)>"Learning Path"</a>
                {QUICK_ACTIONS
                    .iter()
                    .map(|(label, href)| view! { <a class="btn" href=*href>{*label}</a> })
                    .collect::<Vec<_>>()}
            </div>
        </DashboardLayout>
    }
}
