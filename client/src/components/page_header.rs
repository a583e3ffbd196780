//! Title block used at the top of each page.

use leptos::prelude::*;

#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <p class="page-header__subtitle">{subtitle}</p>
        </div>
    }
}
