use shared_types::{AuthError, ProtectedSection};

use super::credentials::CredentialVerifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Locked,
    Unlocked,
}

/// Secondary challenge for one visit to a protected section.
///
/// A fresh gate is created each time the section is mounted, so leaving and
/// coming back asks for the code again. Once unlocked it stays unlocked
/// until dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryGate {
    section: ProtectedSection,
    state: GateState,
    failed_attempts: u32,
}

impl SecondaryGate {
    pub fn new(section: ProtectedSection) -> Self {
        Self {
            section,
            state: GateState::Locked,
            failed_attempts: 0,
        }
    }

    pub fn section(&self) -> ProtectedSection {
        self.section
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Submit a code. Wrong codes leave the gate locked; there is no limit
    /// on retries.
    pub fn attempt(&mut self, code: &str, verifier: &dyn CredentialVerifier) -> Result<(), AuthError> {
        if self.is_unlocked() {
            return Ok(());
        }
        match verifier.verify_secure_code(code) {
            Ok(()) => {
                self.state = GateState::Unlocked;
                tracing::info!(section = self.section.display_name(), "Secure section unlocked");
                Ok(())
            }
            Err(e) => {
                self.failed_attempts += 1;
                tracing::warn!(
                    section = self.section.display_name(),
                    attempts = self.failed_attempts,
                    "Secure section code rejected"
                );
                Err(e)
            }
        }
    }
}
