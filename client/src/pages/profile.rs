//! Profile page: personal details and learning preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is seeded from the session once on mount and saved as a single
//! `ProfileUpdate` through the session service, which persists it before the
//! shared auth state changes.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::app::use_session;
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::page_header::PageHeader;
use crate::pages::login::{auth_error_message, validate_email};
use crate::state::auth::AuthState;
use crate::types::ProfileUpdate;

const MISSING_NAME: &str = "Name cannot be empty.";
const DEFAULT_LEARNING_STYLE: &str = "visual";

pub(crate) const LEARNING_STYLES: [(&str, &str); 5] = [
    ("visual", "Visual"),
    ("auditory", "Auditory"),
    ("kinesthetic", "Kinesthetic"),
    ("reading", "Reading/Writing"),
    ("multimodal", "Multimodal"),
];

pub(crate) const PROFILE_SUBJECTS: [(&str, &str); 9] = [
    ("math", "Mathematics"),
    ("science", "Science"),
    ("english", "English"),
    ("history", "History"),
    ("geography", "Geography"),
    ("physics", "Physics"),
    ("chemistry", "Chemistry"),
    ("biology", "Biology"),
    ("economics", "Economics"),
];

/// Add `id` if absent, remove it if present; order of the rest is kept.
pub(crate) fn toggle_subject(current: &[String], id: &str) -> Vec<String> {
    if current.iter().any(|s| s == id) {
        current.iter().filter(|s| *s != id).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(id.to_owned());
        next
    }
}

/// Validate the form and build the patch sent to the session service.
pub(crate) fn build_profile_update(
    name: &str,
    email: &str,
    learning_style: &str,
    subjects: &[String],
) -> Result<ProfileUpdate, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MISSING_NAME);
    }
    let email = validate_email(email)?;
    Ok(ProfileUpdate {
        name: Some(name.to_owned()),
        email: Some(email),
        learning_style: Some(learning_style.to_owned()),
        subjects: Some(subjects.to_vec()),
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();

    let current = auth.get_untracked().user;
    let name = RwSignal::new(current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let style = RwSignal::new(
        current
            .as_ref()
            .and_then(|u| u.learning_style.clone())
            .unwrap_or_else(|| DEFAULT_LEARNING_STYLE.to_owned()),
    );
    let subjects = RwSignal::new(current.map(|u| u.subject_list().to_vec()).unwrap_or_default());
    let info = RwSignal::new(String::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = match build_profile_update(&name.get(), &email.get(), &style.get(), &subjects.get()) {
            Ok(update) => update,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        match session.get().update_profile(&update) {
            Ok(_) => info.set("Profile updated.".to_owned()),
            Err(e) => info.set(auth_error_message(&e)),
        }
    };

    view! {
        <DashboardLayout>
            <PageHeader
                title="Your Profile"
                subtitle="Manage your account and personalize your learning experience."
            />
            <form class="profile-form" on:submit=on_save>
                <fieldset class="profile-form__section">
                    <legend>"Personal Information"</legend>
                    <label class="profile-form__label">
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                </fieldset>

                <fieldset class="profile-form__section">
                    <legend>"Learning Style"</legend>
                    {LEARNING_STYLES
                        .iter()
                        .map(|(id, label)| {
                            let id = *id;
                            view! {
                                <label class="profile-form__choice">
                                    <input
                                        type="radio"
                                        name="learning-style"
                                        prop:checked=move || style.get() == id
                                        on:change=move |_| style.set(id.to_owned())
                                    />
                                    {*label}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <fieldset class="profile-form__section">
                    <legend>"Subjects"</legend>
                    {PROFILE_SUBJECTS
                        .iter()
                        .map(|(id, label)| {
                            let id = *id;
                            view! {
                                <label class="profile-form__choice">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || subjects.get().iter().any(|s| s == id)
                                        on:change=move |_| {
                                            subjects.update(|s| {
                                                let next = toggle_subject(s, id);
                                                *s = next;
                                            });
                                        }
                                    />
                                    {*label}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <button class="btn btn--primary" type="submit">"Save Changes"</button>
                <Show when=move || !info.get().is_empty()>
                    <p class="profile-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </DashboardLayout>
    }
}
