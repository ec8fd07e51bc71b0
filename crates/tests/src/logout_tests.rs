use pretty_assertions::assert_eq;
use services::KeyValueStore;
use shared_types::{AccessDecision, GuardClass, SESSION_STORAGE_KEY};

use crate::common;

#[test]
fn test_logout_clears_session_and_record() {
    let (mut store, storage) = common::signed_in();

    assert!(store.logout());

    assert!(!store.is_authenticated());
    assert_eq!(store.session(), None);
    assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
}

#[test]
fn test_logout_is_idempotent() {
    let (mut store, storage) = common::signed_in();

    assert!(store.logout());
    assert!(!store.logout(), "Second logout has nobody to sign out");
    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn test_logout_while_anonymous_is_harmless() {
    let (mut store, _storage) = common::test_session_store();
    assert!(!store.logout());
    assert!(!store.is_authenticated());
}

#[test]
fn test_logout_leaves_preferences_alone() {
    let (mut store, storage) = common::signed_in();
    storage.set("sidebarCollapsed", "true");
    storage.set("selectedDepartment", "Neurology");

    store.logout();

    assert_eq!(storage.get("sidebarCollapsed").as_deref(), Some("true"));
    assert_eq!(storage.get("selectedDepartment").as_deref(), Some("Neurology"));
}

#[test]
fn test_dashboard_reachable_only_while_signed_in() {
    let (mut store, _storage) = common::signed_in();
    assert_eq!(
        common::decide(GuardClass::Authenticated, &store),
        AccessDecision::Render
    );

    store.logout();

    assert_eq!(
        common::decide(GuardClass::Authenticated, &store),
        AccessDecision::RedirectToLogin
    );
}
