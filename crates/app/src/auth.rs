use dioxus::prelude::*;
use services::{SecondaryGate, SessionStore};
use shared_types::{AuthError, Session};

/// Global authentication state.
///
/// Wraps the session store in a signal so every reader re-renders on
/// login and logout.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    store: Signal<SessionStore>,
}

impl AuthState {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store: Signal::new(store),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read().is_authenticated()
    }

    pub fn session(&self) -> Option<Session> {
        self.store.read().session().cloned()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.store.write().login(email, password)
    }

    pub fn logout(&mut self) -> bool {
        self.store.write().logout()
    }

    /// Check a secondary code against the same verifier that signed the
    /// user in. Does not touch the session, so no subscriber re-renders.
    pub fn unlock(&self, gate: &mut SecondaryGate, code: &str) -> Result<(), AuthError> {
        self.store.peek().unlock(gate, code)
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
