//! Page shell shared by every protected page: sidebar, navbar, content.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-layout">
            <Sidebar/>
            <div class="dashboard-layout__main">
                <Navbar/>
                <main class="dashboard-layout__content">{children()}</main>
            </div>
        </div>
    }
}
