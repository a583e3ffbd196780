//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one `SessionService` for this browser tab, mirrors its
//! state into an `RwSignal<AuthState>`, and hands both to the route tree via
//! context. Protected routes are wrapped in `ProtectedRoute` here so pages
//! never repeat the guard.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    dashboard::DashboardPage,
    home::HomePage,
    learning_path::LearningPathPage,
    login::{AuthPage, LoginPage, RegisterPage},
    not_found::NotFoundPage,
    profile::ProfilePage,
    progress::ProgressPage,
    quiz::QuizPage,
    resources::ResourcesPage,
    settings::SettingsPage,
    tutor_chat::TutorChatPage,
};
use crate::routes::{
    AUTH_PATH, DASHBOARD_PATH, HOME_PATH, LEARNING_PATH_PATH, LOGIN_PATH, PROFILE_PATH, PROGRESS_PATH, QUIZ_PATH,
    REGISTER_PATH, RESOURCES_PATH, SETTINGS_PATH, TUTOR_CHAT_PATH, segment,
};
use crate::services::session::{SessionConfig, SessionService};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;
use crate::util::timer::BrowserTimer;

/// The session service as wired in the browser.
pub type AppSession = SessionService<BrowserStorage, BrowserTimer>;

/// Context handle for the tab's session service.
///
/// The service is `!Send`, so it lives in thread-local reactive storage and
/// the handle itself is a `Copy` arena key that closures can capture freely.
#[derive(Clone, Copy)]
pub struct SessionHandle(StoredValue<Rc<AppSession>, LocalStorage>);

impl SessionHandle {
    pub fn get(self) -> Rc<AppSession> {
        self.0.get_value()
    }
}

/// Fetch the session handle provided by [`App`].
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());

    let service = SessionService::new(BrowserStorage, BrowserTimer, SessionConfig::default());
    service.subscribe(move |state| auth.set(state.clone()));
    let session = SessionHandle(StoredValue::new_local(Rc::new(service)));

    provide_context(auth);
    provide_context(ui);
    provide_context(session);

    // Effects only run in the browser, where the snapshot and theme live.
    Effect::new(move || {
        session.get().initialize();
        let dark = dark_mode::read_preference(&BrowserStorage);
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/edumentor.css"/>
        <Title text="EduMentor"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(segment(HOME_PATH)) view=HomePage/>
                <Route path=StaticSegment(segment(AUTH_PATH)) view=AuthPage/>
                <Route path=StaticSegment(segment(LOGIN_PATH)) view=LoginPage/>
                <Route path=StaticSegment(segment(REGISTER_PATH)) view=RegisterPage/>
                <Route
                    path=StaticSegment(segment(DASHBOARD_PATH))
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(segment(LEARNING_PATH_PATH))
                    view=|| view! { <ProtectedRoute><LearningPathPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(segment(TUTOR_CHAT_PATH))
                    view=|| view! { <ProtectedRoute><TutorChatPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(segment(QUIZ_PATH))
                    view=|| view! { <ProtectedRoute><QuizPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(segment(PROFILE_PATH))
                    view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(segment(RESOURCES_PATH))
                    view=|| view! { <ProtectedRoute><ResourcesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(segment(PROGRESS_PATH))
                    view=|| view! { <ProtectedRoute><ProgressPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(segment(SETTINGS_PATH))
                    view=|| view! { <ProtectedRoute><SettingsPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
