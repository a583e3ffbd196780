//! Quiz page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::page_header::PageHeader;

#[component]
pub fn QuizPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <PageHeader title="Quizzes" subtitle="Check your understanding with short quizzes."/>
        </DashboardLayout>
    }
}
