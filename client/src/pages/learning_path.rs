//! Learning path page, focused on one subject at a time.
//!
//! The focused subject comes from the `subject` query parameter (the dashboard
//! links here with it set) and defaults to mathematics.

#[cfg(test)]
#[path = "learning_path_test.rs"]
mod learning_path_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::page_header::PageHeader;
use crate::routes::{SUBJECT_PARAM, learning_path_href, resolve_subject};

/// Subjects that have a learning path, as `(id, label)`.
pub(crate) const SUBJECTS: [(&str, &str); 4] = [
    ("math", "Mathematics"),
    ("science", "Science"),
    ("english", "English"),
    ("history", "History"),
];

pub(crate) fn subject_label(id: &str) -> Option<&'static str> {
    SUBJECTS.iter().find(|(sid, _)| *sid == id).map(|(_, label)| *label)
}

#[component]
pub fn LearningPathPage() -> impl IntoView {
    let query = use_query_map();
    let subject = Memo::new(move |_| resolve_subject(query.get().get(SUBJECT_PARAM).as_deref()));

    view! {
        <DashboardLayout>
            <PageHeader
                title="Learning Paths"
                subtitle="Personalized learning journeys tailored to your pace and preferences."
            />
            <div class="subject-tabs">
                {SUBJECTS
                    .iter()
                    .map(|(id, label)| {
                        let id = *id;
                        view! {
                            <a
                                href=learning_path_href(Some(id))
                                class="subject-tabs__tab"
                                class:subject-tabs__tab--active=move || subject.get() == id
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <section class="learning-path">
                {move || {
                    let id = subject.get();
                    match subject_label(&id) {
                        Some(label) => format!("Your {label} path"),
                        None => format!("No learning path for \"{id}\" yet."),
                    }
                }}
            </section>
        </DashboardLayout>
    }
}
