//! Progress overview page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::page_header::PageHeader;

#[component]
pub fn ProgressPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <PageHeader title="My Progress" subtitle="Track how far you have come in each subject."/>
        </DashboardLayout>
    }
}
