//! Client-side session service: sign-in, registration, logout and profile edits.
//!
//! ARCHITECTURE
//! ============
//! `SessionService` is the single owner of the current [`AuthState`]. Every
//! mutation writes the user snapshot through to the [`KeyValueStore`] first
//! and only then updates memory, so a visible session always matches what a
//! reload would restore. Subscribers receive the full state after each
//! transition; the Leptos layer mirrors it into an `RwSignal`.
//!
//! TRADE-OFFS
//! ==========
//! There is no backend. Sign-in waits a fixed simulated delay and then asks a
//! [`CredentialVerifier`]; the default verifier accepts everything. Rejection
//! is still a first-class outcome so real verification can slot in later.
//!
//! All state lives in `Cell`/`RefCell` on the UI thread. No borrow is held
//! across the simulated delay.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::state::auth::AuthState;
use crate::types::{ProfileUpdate, User};
use crate::util::storage::{KeyValueStore, StorageError, load_json, save_json};
use crate::util::timer::Timer;

/// `localStorage` key holding the JSON user snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "aiTutorUser";
/// Simulated round-trip for sign-in and registration.
pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(1000);

const ID_PREFIX: &str = "user-";
const ID_SUFFIX_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const LOGIN_LEARNING_STYLE: &str = "visual";
const LOGIN_SUBJECTS: [&str; 2] = ["Math", "Science"];
const REGISTER_LEARNING_STYLE: &str = "undetermined";

/// Tunables for the session service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Storage key for the persisted user snapshot.
    pub storage_key: String,
    /// Delay applied before every sign-in or registration completes.
    pub auth_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), auth_delay: DEFAULT_AUTH_DELAY }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("credentials rejected")]
    CredentialsRejected,
    #[error("no active session")]
    NoActiveSession,
    #[error("a sign-in attempt is already in progress")]
    AttemptPending,
    #[error("could not save session: {0}")]
    Storage(#[from] StorageError),
}

/// Decides whether a sign-in attempt is allowed to proceed.
pub trait CredentialVerifier {
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialsRejected`] when the pair is not accepted.
    fn verify(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Accepts every email/password pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAnyCredentials;

impl CredentialVerifier for AcceptAnyCredentials {
    fn verify(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Render the low bits of `entropy` as a fixed-width base-36 suffix.
pub(crate) fn id_suffix(mut entropy: u128) -> String {
    let mut out = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        let digit = usize::try_from(entropy % 36).unwrap_or_default();
        out.push(char::from(ID_ALPHABET[digit]));
        entropy /= 36;
    }
    out
}

/// Generate a fresh `user-xxxxxxxxx` identifier.
#[must_use]
pub fn generate_user_id() -> String {
    format!("{ID_PREFIX}{}", id_suffix(uuid::Uuid::new_v4().as_u128()))
}

/// Everything before the first `@`, or the whole input when there is none.
#[must_use]
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// User fabricated for a successful login.
#[must_use]
pub fn login_user(id: String, email: &str) -> User {
    User {
        id,
        name: email_local_part(email).to_owned(),
        email: email.to_owned(),
        learning_style: Some(LOGIN_LEARNING_STYLE.to_owned()),
        subjects: Some(LOGIN_SUBJECTS.iter().map(|s| (*s).to_owned()).collect()),
    }
}

/// User fabricated for a successful registration.
#[must_use]
pub fn registered_user(id: String, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        learning_style: Some(REGISTER_LEARNING_STYLE.to_owned()),
        subjects: Some(Vec::new()),
    }
}

type Listener = Box<dyn Fn(&AuthState)>;

/// Clears the in-flight flag when an attempt ends. An attempt dropped before
/// it settled also publishes `loading = false`.
struct PendingAttempt<'a, S: KeyValueStore, T: Timer> {
    service: &'a SessionService<S, T>,
    settled: bool,
}

impl<S: KeyValueStore, T: Timer> Drop for PendingAttempt<'_, S, T> {
    fn drop(&mut self) {
        self.service.attempt_in_flight.set(false);
        if !self.settled {
            leptos::logging::warn!("sign-in abandoned before it completed");
            self.service.transition(|s| s.loading = false);
        }
    }
}

/// Owner of the current session and its persisted snapshot.
pub struct SessionService<S, T> {
    store: S,
    timer: T,
    config: SessionConfig,
    verifier: Box<dyn CredentialVerifier>,
    state: RefCell<AuthState>,
    listeners: RefCell<Vec<Listener>>,
    attempt_in_flight: Cell<bool>,
}

impl<S: KeyValueStore, T: Timer> SessionService<S, T> {
    /// Create a service in the pending state; call [`Self::initialize`] to
    /// restore any persisted session.
    pub fn new(store: S, timer: T, config: SessionConfig) -> Self {
        Self {
            store,
            timer,
            config,
            verifier: Box::new(AcceptAnyCredentials),
            state: RefCell::new(AuthState::pending()),
            listeners: RefCell::new(Vec::new()),
            attempt_in_flight: Cell::new(false),
        }
    }

    #[must_use]
    pub fn with_verifier(mut self, verifier: impl CredentialVerifier + 'static) -> Self {
        self.verifier = Box::new(verifier);
        self
    }

    /// Register a callback invoked with the full state after every transition.
    ///
    /// Listeners must not subscribe further listeners from inside the callback.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Restore the persisted snapshot, if any, and clear the loading flag.
    ///
    /// A snapshot that fails to parse is discarded.
    pub fn initialize(&self) -> AuthState {
        let key = self.config.storage_key.as_str();
        let user = match load_json::<User, _>(&self.store, key) {
            Some(Ok(user)) => Some(user),
            Some(Err(raw)) => {
                leptos::logging::warn!("discarding malformed session snapshot ({} bytes)", raw.len());
                self.store.remove(key);
                None
            }
            None => None,
        };
        self.transition(|s| {
            s.user = user;
            s.loading = false;
        })
    }

    /// Sign in with `email`; on success the fabricated user becomes the session.
    ///
    /// # Errors
    ///
    /// [`AuthError::AttemptPending`] if another attempt is in flight,
    /// [`AuthError::CredentialsRejected`] from the verifier, or
    /// [`AuthError::Storage`] if the snapshot cannot be written.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.sign_in(email, password, |id| login_user(id, email)).await
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::login`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        self.sign_in(email, password, |id| registered_user(id, name, email)).await
    }

    async fn sign_in<F>(&self, email: &str, password: &str, build: F) -> Result<User, AuthError>
    where
        F: FnOnce(String) -> User,
    {
        if self.attempt_in_flight.replace(true) {
            return Err(AuthError::AttemptPending);
        }
        let mut pending = PendingAttempt { service: self, settled: false };

        self.transition(|s| s.loading = true);
        self.timer.sleep(self.config.auth_delay).await;

        let outcome = self.verifier.verify(email, password).and_then(|()| {
            let user = build(generate_user_id());
            self.persist(&user)?;
            Ok(user)
        });

        match &outcome {
            Ok(user) => {
                leptos::logging::log!("signed in as {}", user.id);
                self.transition(|s| {
                    s.user = Some(user.clone());
                    s.loading = false;
                });
            }
            Err(e) => {
                leptos::logging::warn!("sign-in failed: {e}");
                self.transition(|s| s.loading = false);
            }
        }
        pending.settled = true;
        outcome
    }

    /// Drop the session and its persisted snapshot.
    pub fn logout(&self) {
        self.store.remove(&self.config.storage_key);
        self.transition(|s| s.user = None);
    }

    /// Shallow-merge `update` into the current user and persist the result.
    ///
    /// # Errors
    ///
    /// [`AuthError::NoActiveSession`] when nobody is signed in, or
    /// [`AuthError::Storage`] if the snapshot cannot be written (the session is
    /// left unchanged).
    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<User, AuthError> {
        let current = self.current_user().ok_or(AuthError::NoActiveSession)?;
        let next = current.merged(update);
        self.persist(&next)?;
        self.transition(|s| s.user = Some(next.clone()));
        Ok(next)
    }

    fn persist(&self, user: &User) -> Result<(), AuthError> {
        save_json(&self.store, &self.config.storage_key, user)?;
        Ok(())
    }

    fn transition(&self, apply: impl FnOnce(&mut AuthState)) -> AuthState {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
        snapshot
    }
}
