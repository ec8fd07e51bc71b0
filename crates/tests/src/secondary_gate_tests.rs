use pretty_assertions::assert_eq;
use services::{GateState, SecondaryGate};
use shared_types::{evaluate, AccessDecision, AuthError, GuardClass, ProtectedSection};

use crate::common::{self, SECURE_CODE};

fn decision(store: &services::SessionStore, gate: &SecondaryGate) -> AccessDecision {
    evaluate(
        GuardClass::Secured(gate.section()),
        store.is_authenticated(),
        gate.is_unlocked(),
    )
}

#[test]
fn test_wrong_code_keeps_accounts_locked() {
    let (store, _storage) = common::signed_in();
    let mut gate = SecondaryGate::new(ProtectedSection::Accounts);

    let result = store.unlock(&mut gate, "letmein");

    assert_eq!(result, Err(AuthError::InvalidSecondaryCode));
    assert_eq!(gate.state(), GateState::Locked);
    assert_eq!(
        decision(&store, &gate),
        AccessDecision::Challenge(ProtectedSection::Accounts)
    );
}

#[test]
fn test_correct_code_renders_accounts() {
    let (store, _storage) = common::signed_in();
    let mut gate = SecondaryGate::new(ProtectedSection::Accounts);

    assert!(store.unlock(&mut gate, "wrong").is_err());
    store
        .unlock(&mut gate, SECURE_CODE)
        .expect("the configured code should unlock");

    assert_eq!(gate.state(), GateState::Unlocked);
    assert_eq!(decision(&store, &gate), AccessDecision::Render);
}

#[test]
fn test_retries_are_unlimited() {
    let (store, _storage) = common::signed_in();
    let mut gate = SecondaryGate::new(ProtectedSection::Communication);

    for _ in 0..25 {
        assert!(store.unlock(&mut gate, "nope").is_err());
    }
    assert_eq!(gate.failed_attempts(), 25);
    assert!(store.unlock(&mut gate, SECURE_CODE).is_ok());
}

#[test]
fn test_unlock_applies_to_exactly_one_mount() {
    let (store, _storage) = common::signed_in();
    let mut accounts = SecondaryGate::new(ProtectedSection::Accounts);
    let communication = SecondaryGate::new(ProtectedSection::Communication);

    store.unlock(&mut accounts, SECURE_CODE).unwrap();

    assert!(accounts.is_unlocked());
    assert!(!communication.is_unlocked());
}

#[test]
fn test_navigating_back_relocks() {
    let (store, _storage) = common::signed_in();

    let mut first_visit = SecondaryGate::new(ProtectedSection::Accounts);
    store.unlock(&mut first_visit, SECURE_CODE).unwrap();
    drop(first_visit);

    let second_visit = SecondaryGate::new(ProtectedSection::Accounts);
    assert_eq!(
        decision(&store, &second_visit),
        AccessDecision::Challenge(ProtectedSection::Accounts)
    );
}

#[test]
fn test_login_password_does_not_unlock() {
    let (store, _storage) = common::signed_in();
    let mut gate = SecondaryGate::new(ProtectedSection::Accounts);
    assert!(store.unlock(&mut gate, common::ADMIN_PASSWORD).is_err());
}

#[test]
fn test_challenge_error_message() {
    assert_eq!(
        AuthError::InvalidSecondaryCode.user_message(),
        "Incorrect password. Please try again."
    );
}
