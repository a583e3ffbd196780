//! Resource library page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::page_header::PageHeader;

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <PageHeader title="Learning Resources" subtitle="Articles, videos and exercises picked for your subjects."/>
        </DashboardLayout>
    }
}
