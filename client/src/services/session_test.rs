use super::*;

use std::future::Future;
use std::rc::Rc;
use std::task::{Poll, Waker};

use crate::util::storage::MemoryStore;

/// Resolves immediately and records every requested wait.
#[derive(Clone, Default)]
struct RecordingTimer {
    waits: Rc<RefCell<Vec<Duration>>>,
}

impl Timer for RecordingTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.waits.borrow_mut().push(duration);
        std::future::ready(())
    }
}

/// Stays pending until `open` is called.
#[derive(Clone, Default)]
struct GateTimer {
    open: Rc<Cell<bool>>,
    waker: Rc<RefCell<Option<Waker>>>,
}

impl GateTimer {
    fn open(&self) {
        self.open.set(true);
        if let Some(waker) = self.waker.borrow_mut().take() {
            waker.wake();
        }
    }
}

impl Timer for GateTimer {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        let gate = self.clone();
        std::future::poll_fn(move |cx| {
            if gate.open.get() {
                Poll::Ready(())
            } else {
                *gate.waker.borrow_mut() = Some(cx.waker().clone());
                Poll::Pending
            }
        })
    }
}

struct RejectAll;

impl CredentialVerifier for RejectAll {
    fn verify(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
        Err(AuthError::CredentialsRejected)
    }
}

type TestService = SessionService<Rc<MemoryStore>, RecordingTimer>;

fn service() -> (TestService, Rc<MemoryStore>) {
    let store = Rc::new(MemoryStore::new());
    let svc = SessionService::new(Rc::clone(&store), RecordingTimer::default(), SessionConfig::default());
    (svc, store)
}

fn stored_user(store: &MemoryStore) -> Option<User> {
    store
        .get(DEFAULT_STORAGE_KEY)
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

// =============================================================================
// id + fabrication helpers
// =============================================================================

#[test]
fn id_suffix_zero_is_all_zero_digits() {
    assert_eq!(id_suffix(0), "000000000");
}

#[test]
fn id_suffix_is_little_endian_base36() {
    assert_eq!(id_suffix(35), "z00000000");
    assert_eq!(id_suffix(36), "010000000");
}

#[test]
fn generate_user_id_has_prefix_and_fixed_suffix() {
    let id = generate_user_id();
    assert!(id.starts_with("user-"));
    assert_eq!(id.len(), "user-".len() + 9);
    assert!(id["user-".len()..].bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
}

#[test]
fn generate_user_id_is_not_constant() {
    assert_ne!(generate_user_id(), generate_user_id());
}

#[test]
fn email_local_part_splits_on_first_at() {
    assert_eq!(email_local_part("a@b.com"), "a");
    assert_eq!(email_local_part("first.last@x@y"), "first.last");
}

#[test]
fn email_local_part_without_at_is_whole_input() {
    assert_eq!(email_local_part("nobody"), "nobody");
}

#[test]
fn login_user_uses_demo_preferences() {
    let user = login_user("user-1".to_owned(), "kim@school.edu");
    assert_eq!(user.name, "kim");
    assert_eq!(user.learning_style.as_deref(), Some("visual"));
    assert_eq!(user.subject_list(), ["Math", "Science"]);
}

// =============================================================================
// initialize
// =============================================================================

#[test]
fn new_service_starts_pending() {
    let (svc, _) = service();
    assert_eq!(svc.state(), AuthState::pending());
}

#[test]
fn initialize_without_snapshot_yields_empty_session() {
    let (svc, _) = service();
    let state = svc.initialize();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn initialize_restores_persisted_user() {
    let (svc, store) = service();
    store.seed(
        DEFAULT_STORAGE_KEY,
        r#"{"id":"user-restored","name":"Rae","email":"rae@x.io","subjects":["History"]}"#,
    );
    let state = svc.initialize();
    let user = state.user.unwrap();
    assert_eq!(user.id, "user-restored");
    assert_eq!(user.subject_list(), ["History"]);
    assert!(!state.loading);
}

#[test]
fn initialize_discards_malformed_snapshot() {
    let (svc, store) = service();
    store.seed(DEFAULT_STORAGE_KEY, "{\"id\": 42");
    let state = svc.initialize();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!store.contains(DEFAULT_STORAGE_KEY));
}

#[test]
fn initialize_honors_custom_storage_key() {
    let store = Rc::new(MemoryStore::new());
    store.seed("other", r#"{"id":"user-2","name":"Lu","email":"lu@x.io"}"#);
    let config = SessionConfig { storage_key: "other".to_owned(), ..SessionConfig::default() };
    let svc = SessionService::new(Rc::clone(&store), RecordingTimer::default(), config);
    assert_eq!(svc.initialize().user.map(|u| u.name), Some("Lu".to_owned()));
}

// =============================================================================
// login / register
// =============================================================================

#[tokio::test]
async fn login_derives_name_from_email_and_persists() {
    let (svc, store) = service();
    svc.initialize();

    let user = svc.login("a@b.com", "anything").await.unwrap();

    assert_eq!(user.name, "a");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(svc.current_user(), Some(user.clone()));
    assert_eq!(stored_user(&store), Some(user));
    assert!(!svc.state().loading);
}

#[tokio::test]
async fn login_accepts_empty_password() {
    let (svc, _) = service();
    svc.initialize();
    assert!(svc.login("a@b.com", "").await.is_ok());
}

#[tokio::test]
async fn login_waits_configured_delay() {
    let timer = RecordingTimer::default();
    let config = SessionConfig { auth_delay: Duration::from_millis(250), ..SessionConfig::default() };
    let svc = SessionService::new(MemoryStore::new(), timer.clone(), config);

    svc.login("a@b.com", "pw").await.unwrap();

    assert_eq!(*timer.waits.borrow(), vec![Duration::from_millis(250)]);
}

#[tokio::test]
async fn login_publishes_loading_then_user() {
    let (svc, _) = service();
    svc.initialize();
    let seen = Rc::new(RefCell::new(Vec::<AuthState>::new()));
    let sink = Rc::clone(&seen);
    svc.subscribe(move |s| sink.borrow_mut().push(s.clone()));

    svc.login("a@b.com", "pw").await.unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].loading);
    assert!(seen[0].user.is_none());
    assert!(!seen[1].loading);
    assert_eq!(seen[1].user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
}

#[tokio::test]
async fn register_uses_supplied_name_and_empty_subjects() {
    let (svc, store) = service();
    svc.initialize();

    let user = svc.register("Jane", "j@x.com", "secret").await.unwrap();

    assert_eq!(user.name, "Jane");
    assert_eq!(user.subjects, Some(Vec::new()));
    assert_eq!(user.learning_style.as_deref(), Some("undetermined"));
    assert_eq!(stored_user(&store).map(|u| u.name), Some("Jane".to_owned()));
}

#[tokio::test]
async fn later_login_replaces_earlier_user() {
    let (svc, store) = service();
    svc.login("first@x.io", "pw").await.unwrap();
    let second = svc.login("second@x.io", "pw").await.unwrap();
    assert_eq!(svc.current_user(), Some(second.clone()));
    assert_eq!(stored_user(&store), Some(second));
}

#[tokio::test]
async fn rejected_credentials_leave_session_untouched() {
    let store = Rc::new(MemoryStore::new());
    let svc = SessionService::new(Rc::clone(&store), RecordingTimer::default(), SessionConfig::default())
        .with_verifier(RejectAll);
    svc.initialize();

    let result = svc.login("a@b.com", "wrong").await;

    assert_eq!(result, Err(AuthError::CredentialsRejected));
    assert_eq!(svc.state(), AuthState { user: None, loading: false });
    assert!(!store.contains(DEFAULT_STORAGE_KEY));
}

#[tokio::test]
async fn storage_failure_leaves_session_empty() {
    let svc = SessionService::new(MemoryStore::read_only(), RecordingTimer::default(), SessionConfig::default());
    svc.initialize();

    let result = svc.register("Jane", "j@x.com", "pw").await;

    assert!(matches!(result, Err(AuthError::Storage(StorageError::Write(_)))));
    assert!(svc.current_user().is_none());
    assert!(!svc.state().loading);
}

#[tokio::test]
async fn second_attempt_while_pending_is_refused() {
    let timer = GateTimer::default();
    let svc = SessionService::new(MemoryStore::new(), timer.clone(), SessionConfig::default());
    svc.initialize();

    let mut first = std::pin::pin!(svc.login("first@x.io", "pw"));
    std::future::poll_fn(|cx| {
        assert!(first.as_mut().poll(cx).is_pending());
        Poll::Ready(())
    })
    .await;
    assert!(svc.state().loading);

    assert_eq!(svc.login("second@x.io", "pw").await, Err(AuthError::AttemptPending));

    timer.open();
    let user = first.await.unwrap();
    assert_eq!(user.email, "first@x.io");
    assert!(!svc.state().loading);
}

#[tokio::test]
async fn abandoned_attempt_clears_loading_and_frees_the_slot() {
    let timer = GateTimer::default();
    let svc = SessionService::new(MemoryStore::new(), timer.clone(), SessionConfig::default());
    svc.initialize();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    svc.subscribe(move |state| log.borrow_mut().push(state.loading));

    {
        let mut first = std::pin::pin!(svc.login("first@x.io", "pw"));
        std::future::poll_fn(|cx| {
            assert!(first.as_mut().poll(cx).is_pending());
            Poll::Ready(())
        })
        .await;
        assert!(svc.state().loading);
    }

    let state = svc.state();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(*seen.borrow(), vec![true, false]);

    timer.open();
    let user = svc.login("second@x.io", "pw").await.unwrap();
    assert_eq!(user.email, "second@x.io");
}

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_clears_session_and_storage() {
    let (svc, store) = service();
    svc.login("a@b.com", "pw").await.unwrap();

    svc.logout();

    assert!(svc.current_user().is_none());
    assert!(!store.contains(DEFAULT_STORAGE_KEY));

    let fresh = SessionService::new(Rc::clone(&store), RecordingTimer::default(), SessionConfig::default());
    assert!(fresh.initialize().user.is_none());
}

#[test]
fn logout_without_session_is_harmless() {
    let (svc, _) = service();
    svc.initialize();
    svc.logout();
    assert_eq!(svc.state(), AuthState::default());
}

// =============================================================================
// update_profile
// =============================================================================

#[tokio::test]
async fn update_profile_changes_only_target_field() {
    let (svc, store) = service();
    let before = svc.login("a@b.com", "pw").await.unwrap();

    let update = ProfileUpdate { name: Some("New".to_owned()), ..ProfileUpdate::default() };
    let after = svc.update_profile(&update).unwrap();

    assert_eq!(after.name, "New");
    assert_eq!(after.id, before.id);
    assert_eq!(after.email, before.email);
    assert_eq!(after.learning_style, before.learning_style);
    assert_eq!(after.subjects, before.subjects);
    assert_eq!(stored_user(&store), Some(after));
}

#[test]
fn update_profile_without_session_errors() {
    let (svc, store) = service();
    svc.initialize();

    let update = ProfileUpdate { name: Some("New".to_owned()), ..ProfileUpdate::default() };

    assert_eq!(svc.update_profile(&update), Err(AuthError::NoActiveSession));
    assert!(svc.current_user().is_none());
    assert!(!store.contains(DEFAULT_STORAGE_KEY));
}

#[test]
fn update_profile_storage_failure_keeps_previous_user() {
    let store = Rc::new(MemoryStore::read_only());
    store.seed(DEFAULT_STORAGE_KEY, r#"{"id":"user-1","name":"Old","email":"o@x.io"}"#);
    let svc = SessionService::new(Rc::clone(&store), RecordingTimer::default(), SessionConfig::default());
    svc.initialize();

    let update = ProfileUpdate { name: Some("New".to_owned()), ..ProfileUpdate::default() };

    assert!(matches!(svc.update_profile(&update), Err(AuthError::Storage(_))));
    assert_eq!(svc.current_user().map(|u| u.name), Some("Old".to_owned()));
}

// =============================================================================
// server-side wiring
// =============================================================================

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn browser_storage_off_wasm_starts_signed_out_and_refuses_sign_in() {
    use crate::util::storage::{BrowserStorage, StorageError};

    let svc = SessionService::new(BrowserStorage, RecordingTimer::default(), SessionConfig::default());
    let state = svc.initialize();
    assert!(state.user.is_none());
    assert!(!state.loading);

    let err = svc.login("a@b.com", "pw").await.unwrap_err();
    assert_eq!(err, AuthError::Storage(StorageError::Unavailable));
    assert!(svc.current_user().is_none());
}
