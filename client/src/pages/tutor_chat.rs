//! Tutor chat page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::page_header::PageHeader;

#[component]
pub fn TutorChatPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <PageHeader title="Chat with your AI Tutor" subtitle="Ask questions and get step-by-step explanations."/>
        </DashboardLayout>
    }
}
