use pretty_assertions::assert_eq;
use shared_types::{evaluate, AccessDecision, GuardClass, ProtectedSection, PROTECTED_SECTIONS};

use crate::common;

#[test]
fn test_anonymous_visit_to_accounts_redirects_to_login() {
    let (store, _storage) = common::test_session_store();
    assert_eq!(
        common::decide(GuardClass::Secured(ProtectedSection::Accounts), &store),
        AccessDecision::RedirectToLogin
    );
}

#[test]
fn test_login_page_is_always_reachable() {
    let (anonymous, _a) = common::test_session_store();
    let (signed_in, _b) = common::signed_in();
    assert_eq!(
        common::decide(GuardClass::Public, &anonymous),
        AccessDecision::Render
    );
    assert_eq!(
        common::decide(GuardClass::Public, &signed_in),
        AccessDecision::Render
    );
}

#[test]
fn test_signed_in_visit_to_protected_sections_is_challenged() {
    let (store, _storage) = common::signed_in();
    for section in PROTECTED_SECTIONS {
        assert_eq!(
            common::decide(GuardClass::Secured(*section), &store),
            AccessDecision::Challenge(*section),
            "{} should ask for the code",
            section.display_name()
        );
    }
}

#[test]
fn test_unlock_never_bypasses_missing_session() {
    // An unlocked gate left over from before logout must not let an
    // anonymous visitor through.
    for section in PROTECTED_SECTIONS {
        assert_eq!(
            evaluate(GuardClass::Secured(*section), false, true),
            AccessDecision::RedirectToLogin
        );
    }
}

#[test]
fn test_every_guarded_route_redirects_after_logout() {
    let (mut store, _storage) = common::signed_in();
    store.logout();

    let classes = [
        GuardClass::Authenticated,
        GuardClass::Secured(ProtectedSection::Accounts),
        GuardClass::Secured(ProtectedSection::Communication),
    ];
    for class in classes {
        assert_eq!(
            common::decide(class, &store),
            AccessDecision::RedirectToLogin,
            "{class:?}"
        );
    }
}

#[test]
fn test_protected_section_paths() {
    assert_eq!(ProtectedSection::Accounts.path(), "/accounts");
    assert_eq!(ProtectedSection::Communication.path(), "/communication");
}
