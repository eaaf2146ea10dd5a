//! Auth store tests: setters, logout and the persisted subset.

use donation_portal::error::StoreError;
use donation_portal::store::auth::{AuthStore, User};
use std::fs;

fn sample_user() -> User {
    User {
        name: Some("Maria Silva".into()),
        email: Some("maria@example.org".into()),
        phone_number: Some("+5511999990000".into()),
        cpf: "12345678900".into(),
    }
}

#[test]
fn set_user_marks_session_authenticated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = AuthStore::open(dir.path()).expect("open");

    assert!(!store.is_authenticated());
    store.set_user(sample_user()).expect("set_user");

    assert!(store.is_authenticated());
    assert_eq!(store.user(), Some(&sample_user()));
}

#[test]
fn set_token_does_not_flip_authenticated_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = AuthStore::open(dir.path()).expect("open");

    store.set_token("bearer-token").expect("set_token");

    assert_eq!(store.token(), Some("bearer-token"));
    assert!(!store.is_authenticated());
}

#[test]
fn logout_clears_state_and_legacy_token_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let legacy = dir.path().join("token");
    fs::write(&legacy, "stale-token-from-old-build").expect("write legacy entry");

    let mut store = AuthStore::open(dir.path()).expect("open");
    store.set_user(sample_user()).expect("set_user");
    store.set_token("bearer-token").expect("set_token");
    store.set_requires_two_factor(true);

    store.logout().expect("logout");

    assert!(store.user().is_none());
    assert!(store.token().is_none());
    assert!(!store.is_authenticated());
    assert!(!store.requires_two_factor());
    assert!(!legacy.exists());
}

#[test]
fn logout_without_legacy_entry_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = AuthStore::open(dir.path()).expect("open");
    store.logout().expect("logout");
}

#[test]
fn persisted_subset_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut store = AuthStore::open(dir.path()).expect("open");
        store.set_user(sample_user()).expect("set_user");
        store.set_token("bearer-token").expect("set_token");
        store.set_requires_two_factor(true);
    }

    let reopened = AuthStore::open(dir.path()).expect("reopen");
    assert_eq!(reopened.user(), Some(&sample_user()));
    assert_eq!(reopened.token(), Some("bearer-token"));
    assert!(reopened.is_authenticated());
    // Session-only flag, never persisted.
    assert!(!reopened.requires_two_factor());
}

#[test]
fn persisted_entry_excludes_two_factor_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = AuthStore::open(dir.path()).expect("open");
    store.set_user(sample_user()).expect("set_user");
    store.set_requires_two_factor(true);
    store.set_token("bearer-token").expect("set_token");

    let raw = fs::read_to_string(dir.path().join("auth-storage.json")).expect("read entry");
    let entry: serde_json::Value = serde_json::from_str(&raw).expect("parse entry");

    assert!(entry.get("user").is_some());
    assert!(entry.get("token").is_some());
    assert_eq!(entry["is_authenticated"], true);
    assert!(entry.get("requires_two_factor").is_none());
}

#[test]
fn corrupt_storage_entry_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("auth-storage.json"), "not json").expect("write");

    let err = AuthStore::open(dir.path()).expect_err("corrupt entry");
    assert!(matches!(err, StoreError::Serialization(_)));
}
