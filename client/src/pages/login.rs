//! Sign-in and registration pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/auth`, `/login` and `/register` render the same card with a different
//! starting tab. Forms validate locally, then call the session service; the
//! service publishes loading/user transitions and the page only tracks its own
//! busy flag and message.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::routes::DASHBOARD_PATH;
use crate::services::session::AuthError;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_forward;

const MISSING_EMAIL: &str = "Enter your email address.";
const INVALID_EMAIL: &str = "Enter a valid email address.";
const MISSING_PASSWORD: &str = "Enter your password.";
const MISSING_NAME: &str = "Enter your name.";

/// Which form the auth card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

pub(crate) fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(MISSING_EMAIL);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_owned()),
        _ => Err(INVALID_EMAIL),
    }
}

/// Trimmed email for the login form. The password is passed through untouched.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<String, &'static str> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(MISSING_PASSWORD);
    }
    Ok(email)
}

/// Trimmed `(name, email)` for the registration form.
pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MISSING_NAME);
    }
    let email = validate_login_input(email, password)?;
    Ok((name.to_owned(), email))
}

/// User-facing text for a failed sign-in.
pub(crate) fn auth_error_message(err: &AuthError) -> String {
    match err {
        AuthError::CredentialsRejected => "Those credentials were not accepted.".to_owned(),
        AuthError::AttemptPending => "Already signing you in...".to_owned(),
        AuthError::NoActiveSession => "You are not signed in.".to_owned(),
        AuthError::Storage(e) => format!("Could not save your session: {e}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthCard initial=AuthTab::Login/> }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthCard initial=AuthTab::Register/> }
}

/// `/auth`: the combined entry point, opening on the login tab.
#[component]
pub fn AuthPage() -> impl IntoView {
    view! { <AuthCard initial=AuthTab::Login/> }
}

#[component]
fn AuthCard(initial: AuthTab) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let navigate = use_navigate();
    install_authed_forward(auth, navigate.clone());

    let tab = RwSignal::new(initial);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let mode = tab.get();
        let password_value = password.get();
        let validated = match mode {
            AuthTab::Login => validate_login_input(&email.get(), &password_value)
                .map(|email| (None, email)),
            AuthTab::Register => validate_register_input(&name.get(), &email.get(), &password_value)
                .map(|(name, email)| (Some(name), email)),
        };
        let (name_value, email_value) = match validated {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };

        busy.set(true);
        info.set(match mode {
            AuthTab::Login => "Signing in...".to_owned(),
            AuthTab::Register => "Creating your account...".to_owned(),
        });

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let service = session.get();
            let result = match name_value {
                Some(name_value) => service.register(&name_value, &email_value, &password_value).await,
                None => service.login(&email_value, &password_value).await,
            };
            busy.set(false);
            match result {
                Ok(_) => {
                    info.set(String::new());
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => info.set(auth_error_message(&e)),
            }
        });
    };

    let select = move |next: AuthTab| {
        tab.set(next);
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EduMentor"</h1>
                <p class="login-card__subtitle">"Your Adaptive Learning AI Tutor"</p>
                <div class="login-card__tabs">
                    <button
                        class="login-card__tab"
                        class:login-card__tab--active=move || tab.get() == AuthTab::Login
                        on:click=move |_| select(AuthTab::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class="login-card__tab"
                        class:login-card__tab--active=move || tab.get() == AuthTab::Register
                        on:click=move |_| select(AuthTab::Register)
                    >
                        "Register"
                    </button>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || tab.get() == AuthTab::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || match tab.get() {
                            AuthTab::Login => "Sign In",
                            AuthTab::Register => "Create Account",
                        }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
