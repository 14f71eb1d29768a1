use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn demo_store() -> (SessionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone(), PortalConfig::default());
    (store, storage)
}

fn remote_store() -> (SessionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let config = PortalConfig::from_values(Some("remote"), None, None).unwrap();
    (SessionStore::new(storage.clone(), config), storage)
}

fn register_req(role: Role) -> RegisterRequest {
    RegisterRequest {
        name: "  Dana  ".to_owned(),
        email: "dana@example.com".to_owned(),
        password: "secret".to_owned(),
        role,
    }
}

// =============================================================================
// demo_user_for_email
// =============================================================================

#[test]
fn demo_admin_email_maps_to_admin() {
    let user = demo_user_for_email(DEMO_ADMIN_EMAIL);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name, "Admin User");
}

#[test]
fn demo_recruiter_email_maps_to_recruiter() {
    let user = demo_user_for_email("recruiter@zidio.com");
    assert_eq!(user.role, Role::Recruiter);
    assert_eq!(user.name, "Recruiter User");
}

#[test]
fn demo_email_match_is_exact() {
    assert_eq!(demo_user_for_email("Recruiter@Zidio.com").role, Role::JobSeeker);
    assert_eq!(demo_user_for_email("ADMIN@zidio.com").role, Role::JobSeeker);
}

#[test]
fn other_emails_map_to_job_seeker() {
    let user = demo_user_for_email("someone@example.com");
    assert_eq!(user.role, Role::JobSeeker);
    assert_eq!(user.email, "someone@example.com");
    assert_eq!(user.id, "1");
    assert!(!user.created_at.is_empty());
}

// =============================================================================
// login
// =============================================================================

#[test]
fn demo_login_issues_token_and_persists() {
    let (store, storage) = demo_store();
    let session = block_on(store.login(" recruiter@zidio.com ", "pw")).unwrap();
    assert_eq!(session.token, DEMO_TOKEN);
    assert_eq!(session.user.role, Role::Recruiter);
    assert_eq!(session.user.email, "recruiter@zidio.com");

    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some(DEMO_TOKEN));
    let persisted: User = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(persisted, session.user);
}

#[test]
fn login_always_yields_token_and_known_role() {
    let (store, _) = demo_store();
    for email in ["admin@zidio.com", "recruiter@zidio.com", "x@y.z"] {
        let session = block_on(store.login(email, "pw")).unwrap();
        assert!(!session.token.is_empty());
        assert!(Role::ALL.contains(&session.user.role));
    }
}

#[test]
fn login_rejects_blank_fields_without_persisting() {
    let (store, storage) = demo_store();
    assert_eq!(
        block_on(store.login("   ", "pw")),
        Err(AuthError::Validation("Email and password are required."))
    );
    assert!(block_on(store.login("a@b.com", "")).is_err());
    assert!(storage.is_empty());
}

#[test]
fn remote_login_failure_propagates_and_does_not_fabricate() {
    let (store, storage) = remote_store();
    let err = block_on(store.login("a@b.com", "pw")).unwrap_err();
    assert_eq!(err, AuthError::Api(ApiError::Unavailable));
    assert!(storage.is_empty());
    assert!(!store.restore().is_authenticated());
}

// =============================================================================
// register
// =============================================================================

#[test]
fn demo_register_generates_id_and_keeps_role() {
    let (store, storage) = demo_store();
    let session = block_on(store.register(register_req(Role::Recruiter))).unwrap();
    assert_eq!(session.user.name, "Dana");
    assert_eq!(session.user.role, Role::Recruiter);
    assert!(uuid::Uuid::parse_str(&session.user.id).is_ok());
    assert!(!session.token.is_empty());
    assert_eq!(storage.len(), 2);
}

#[test]
fn demo_register_ids_are_unique() {
    let (store, _) = demo_store();
    let a = block_on(store.register(register_req(Role::JobSeeker))).unwrap();
    let b = block_on(store.register(register_req(Role::JobSeeker))).unwrap();
    assert_ne!(a.user.id, b.user.id);
}

#[test]
fn register_rejects_admin_role() {
    let (store, storage) = demo_store();
    assert!(matches!(
        block_on(store.register(register_req(Role::Admin))),
        Err(AuthError::Validation(_))
    ));
    assert!(storage.is_empty());
}

#[test]
fn register_requires_name() {
    let (store, _) = demo_store();
    let mut req = register_req(Role::JobSeeker);
    req.name = "  ".to_owned();
    assert_eq!(block_on(store.register(req)), Err(AuthError::Validation("Name is required.")));
}

#[test]
fn remote_register_failure_propagates() {
    let (store, storage) = remote_store();
    assert_eq!(
        block_on(store.register(register_req(Role::JobSeeker))),
        Err(AuthError::Api(ApiError::Unavailable))
    );
    assert!(storage.is_empty());
}

// =============================================================================
// restore / logout
// =============================================================================

#[test]
fn restore_empty_storage_is_ready_and_signed_out() {
    let (store, _) = demo_store();
    assert_eq!(store.restore(), AuthState::signed_out());
}

#[test]
fn restore_after_login_is_authenticated() {
    let (store, storage) = demo_store();
    let session = block_on(store.login("admin@zidio.com", "pw")).unwrap();

    let reopened = SessionStore::new(storage, PortalConfig::default());
    assert_eq!(reopened.restore(), AuthState::signed_in(session));
}

#[test]
fn restore_with_token_only_clears_storage() {
    let (store, storage) = demo_store();
    storage.set(TOKEN_KEY, "tok");
    assert!(!store.restore().is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn restore_with_corrupt_user_clears_storage() {
    let (store, storage) = demo_store();
    storage.set(TOKEN_KEY, "tok");
    storage.set(USER_KEY, "{not json");
    assert!(!store.restore().is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn logout_clears_storage_and_state() {
    let (store, storage) = demo_store();
    block_on(store.login("a@b.com", "pw")).unwrap();
    let state = store.logout();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

// =============================================================================
// AuthError
// =============================================================================

#[test]
fn user_message_for_rejected_credentials() {
    let err = AuthError::Api(ApiError::Status { status: 401 });
    assert_eq!(err.user_message(), "Invalid email or password.");
}

#[test]
fn user_message_for_transport_failure() {
    let err = AuthError::Api(ApiError::Transport("offline".to_owned()));
    assert_eq!(err.user_message(), "Could not reach the server: network error: offline");
}
