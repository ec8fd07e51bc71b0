use serde::{Deserialize, Serialize};
use std::fmt;

/// Authentication failures surfaced to staff as transient notifications.
///
/// Both kinds are recoverable: the worst case is staying on the login
/// page or on the secure-section challenge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthError {
    /// Primary login with an unknown email/password pair.
    InvalidCredentials,
    /// Wrong code entered on a secure-section challenge.
    InvalidSecondaryCode,
}

impl AuthError {
    /// Short heading for the notification toast.
    pub fn title(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Login failed",
            AuthError::InvalidSecondaryCode => "Access denied",
        }
    }

    /// Message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Invalid email or password.",
            AuthError::InvalidSecondaryCode => "Incorrect password. Please try again.",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for AuthError {}
