//! Settings page: display preferences.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::page_header::PageHeader;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(&BrowserStorage, ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <DashboardLayout>
            <PageHeader title="Settings" subtitle="Adjust how EduMentor looks and behaves."/>
            <section class="settings-page__section">
                <label class="settings-page__row">
                    <span>"Dark mode"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || ui.get().dark_mode
                        on:change=on_toggle_dark
                    />
                </label>
            </section>
        </DashboardLayout>
    }
}
