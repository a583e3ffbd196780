//! Catch-all page for unknown routes.

use leptos::prelude::*;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Oops! Page not found."</p>
            <a href=HOME_PATH>"Return to Home"</a>
        </div>
    }
}
