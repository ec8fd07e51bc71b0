use std::rc::Rc;

use shared_types::{AuthError, Session, SESSION_STORAGE_KEY};

use super::credentials::CredentialVerifier;
use super::gate::SecondaryGate;
use crate::storage::KeyValueStore;

/// Process-wide record of who is signed in.
///
/// Starts signed out on every launch. A successful login also writes the
/// profile under [`SESSION_STORAGE_KEY`] so other tooling can see it; that
/// record is never read back to restore a session.
pub struct SessionStore {
    session: Option<Session>,
    verifier: Rc<dyn CredentialVerifier>,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(verifier: Rc<dyn CredentialVerifier>, storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            session: None,
            verifier,
            storage,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Sign in. On failure the store is left exactly as it was.
    pub fn login(&mut self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        let session = self
            .verifier
            .verify_login(identifier, secret)
            .inspect_err(|_| tracing::warn!(identifier = identifier.trim(), "Login rejected"))?;

        match serde_json::to_string(&session) {
            Ok(record) => self.storage.set(SESSION_STORAGE_KEY, &record),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize session record"),
        }
        tracing::info!(user_id = %session.id, role = session.role.as_str(), "Staff member signed in");

        self.session = Some(session.clone());
        Ok(session)
    }

    /// Sign out and clear the persisted record. Returns whether anyone was
    /// signed in; calling it while signed out is harmless.
    pub fn logout(&mut self) -> bool {
        self.storage.remove(SESSION_STORAGE_KEY);
        match self.session.take() {
            Some(previous) => {
                tracing::info!(user_id = %previous.id, "Staff member signed out");
                true
            }
            None => false,
        }
    }

    /// Attempt to unlock a protected section for the current visit.
    pub fn unlock(&self, gate: &mut SecondaryGate, code: &str) -> Result<(), AuthError> {
        gate.attempt(code, self.verifier.as_ref())
    }

    /// The profile last written to storage, if any.
    pub fn persisted_record(&self) -> Option<Session> {
        let raw = self.storage.get(SESSION_STORAGE_KEY)?;
        serde_json::from_str(&raw).ok()
    }
}
