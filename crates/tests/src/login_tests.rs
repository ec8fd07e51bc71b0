use pretty_assertions::assert_eq;
use services::KeyValueStore;
use shared_types::{AuthError, StaffRole, SESSION_STORAGE_KEY};

use crate::common::{self, ADMIN_EMAIL, ADMIN_PASSWORD};

#[test]
fn test_login_with_fixed_pair_succeeds() {
    let (mut store, storage) = common::test_session_store();

    let session = store
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .expect("admin credentials should be accepted");

    assert!(store.is_authenticated());
    assert_eq!(session.email, ADMIN_EMAIL);
    assert_eq!(session.role, StaffRole::Admin);
    assert!(
        storage.get(SESSION_STORAGE_KEY).is_some(),
        "Successful login should persist the session record"
    );
}

#[test]
fn test_login_rejects_every_other_pair() {
    let pairs = [
        ("x", "y"),
        ("", ""),
        (ADMIN_EMAIL, ""),
        (ADMIN_EMAIL, "Password"),
        (ADMIN_EMAIL, "password "),
        ("admin@hospital.org", ADMIN_PASSWORD),
        ("doctor@hospital.com", ADMIN_PASSWORD),
        ("  Admin@Hospital.COM ", ADMIN_PASSWORD),
        ("ADMIN@HOSPITAL.COM", ADMIN_PASSWORD),
        ("  ADMIN@HOSPITAL.COM\t", ADMIN_PASSWORD),
        (ADMIN_PASSWORD, ADMIN_EMAIL),
    ];

    for (email, password) in pairs {
        let (mut store, storage) = common::test_session_store();
        let result = store.login(email, password);

        assert_eq!(
            result,
            Err(AuthError::InvalidCredentials),
            "({email:?}, {password:?}) should be rejected"
        );
        assert!(!store.is_authenticated());
        assert!(storage.is_empty(), "Rejected login must not write storage");
    }
}

#[test]
fn test_login_failure_message_is_user_facing() {
    let (mut store, _storage) = common::test_session_store();
    let err = store.login("x", "y").unwrap_err();
    assert_eq!(err.user_message(), "Invalid email or password.");
}

#[test]
fn test_persisted_record_matches_session() {
    let (store, storage) = common::signed_in();

    let raw = storage.get(SESSION_STORAGE_KEY).unwrap();
    let record: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(record["email"], ADMIN_EMAIL);
    assert_eq!(record["role"], "admin");
    assert_eq!(store.persisted_record().as_ref(), store.session());
}

#[test]
fn test_retrying_after_failure_succeeds() {
    let (mut store, _storage) = common::test_session_store();
    assert!(store.login(ADMIN_EMAIL, "wrong").is_err());
    assert!(store.login(ADMIN_EMAIL, "wrong again").is_err());
    assert!(store.login(ADMIN_EMAIL, ADMIN_PASSWORD).is_ok());
    assert!(store.is_authenticated());
}
